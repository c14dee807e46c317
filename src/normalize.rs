use crate::ir::{CharacterRecord, NormalizedCharacter, Point, Stroke};

/// Coordinate types the normalizer accepts.
pub trait Coordinate: Copy {
    fn to_f64(self) -> f64;
}

impl Coordinate for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Coordinate for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

fn bounds<T: Coordinate>(strokes: &[Stroke<T>]) -> Option<Bounds> {
    let mut points = strokes.iter().flatten();
    let first = points.next()?;
    let (x, y) = (first.x.to_f64(), first.y.to_f64());
    let init = Bounds {
        min_x: x,
        max_x: x,
        min_y: y,
        max_y: y,
    };
    Some(points.fold(init, |b, p| {
        let (x, y) = (p.x.to_f64(), p.y.to_f64());
        Bounds {
            min_x: b.min_x.min(x),
            max_x: b.max_x.max(x),
            min_y: b.min_y.min(y),
            max_y: b.max_y.max(y),
        }
    }))
}

/// Scales a character into the unit square. Both axes are translated to
/// start at 0 and divided by the longer side; a character with no points
/// yields no strokes.
pub fn normalize<T: Coordinate>(strokes: &[Stroke<T>]) -> Vec<Stroke<f64>> {
    let Some(b) = bounds(strokes) else {
        return Vec::new();
    };
    let scale = (b.max_x - b.min_x).max(b.max_y - b.min_y);
    let scale = if scale == 0.0 { 1.0 } else { scale };

    strokes
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .map(|p| {
                    Point::new(
                        (p.x.to_f64() - b.min_x) / scale,
                        (p.y.to_f64() - b.min_y) / scale,
                    )
                })
                .collect()
        })
        .collect()
}

/// Normalizes a record's strokes, or `None` when there is nothing to keep.
pub fn normalize_record<T: Coordinate>(record: CharacterRecord<T>) -> Option<NormalizedCharacter> {
    let strokes = normalize(&record.strokes);
    if strokes.is_empty() {
        return None;
    }
    Some(CharacterRecord {
        glyph: record.glyph,
        strokes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn raw(points: &[(i64, i64)]) -> Stroke<i64> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn span(strokes: &[Stroke<f64>]) -> (f64, f64) {
        let b = bounds(strokes).unwrap();
        (b.max_x - b.min_x, b.max_y - b.min_y)
    }

    #[test]
    fn test_square_character() {
        let out = normalize(&[raw(&[(0, 0), (10, 0), (10, 10)])]);
        assert_eq!(
            out,
            vec![vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0)
            ]]
        );
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let out = normalize(&[raw(&[(100, 200), (300, 200)]), raw(&[(200, 150), (200, 250)])]);
        assert_eq!(out[0], vec![Point::new(0.0, 0.25), Point::new(1.0, 0.25)]);
        assert_eq!(out[1], vec![Point::new(0.5, 0.0), Point::new(0.5, 0.5)]);
    }

    #[test]
    fn test_single_point() {
        let out = normalize(&[raw(&[(42, 17)])]);
        assert_eq!(out, vec![vec![Point::new(0.0, 0.0)]]);
    }

    #[test]
    fn test_coincident_points() {
        let out = normalize(&[raw(&[(5, 5), (5, 5)]), raw(&[(5, 5)])]);
        assert!(out.iter().flatten().all(|p| p.x == 0.0 && p.y == 0.0));
        assert_eq!(out[0].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize::<i64>(&[]).is_empty());
        assert!(normalize::<i64>(&[Vec::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn test_grouping_and_order_preserved() {
        let input = vec![raw(&[(3, 1), (1, 3)]), raw(&[(2, 2)]), raw(&[(0, 0), (4, 4), (1, 0)])];
        let out = normalize(&input);
        let lens: Vec<usize> = out.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![2, 1, 3]);
        assert_eq!(out[0][0], Point::new(0.75, 0.25));
        assert_eq!(out[2][2], Point::new(0.25, 0.0));
    }

    #[test]
    fn test_longer_axis_spans_unit() {
        let cases = vec![
            vec![raw(&[(0, 0), (7, 3)])],
            vec![raw(&[(-4, 10), (2, 40)]), raw(&[(0, 25)])],
            vec![raw(&[(13, 13), (14, 113)])],
        ];
        for strokes in cases {
            let (w, h) = span(&normalize(&strokes));
            assert!((w - 1.0).abs() < EPS || (h - 1.0).abs() < EPS);
            assert!(w <= 1.0 + EPS && h <= 1.0 + EPS);
        }
    }

    #[test]
    fn test_idempotent() {
        let strokes = vec![raw(&[(17, 3), (91, 48)]), raw(&[(33, 60), (12, 7), (80, 80)])];
        let once = normalize(&strokes);
        let twice = normalize(&once);
        for (a, b) in once.iter().flatten().zip(twice.iter().flatten()) {
            assert!((a.x - b.x).abs() < EPS);
            assert!((a.y - b.y).abs() < EPS);
        }
    }

    #[test]
    fn test_normalize_record() {
        let rec = CharacterRecord {
            glyph: "あ".to_string(),
            strokes: vec![raw(&[(0, 0), (10, 10)])],
        };
        let out = normalize_record(rec).unwrap();
        assert_eq!(out.glyph, "あ");
        assert_eq!(out.strokes[0][1], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_normalize_record_without_points() {
        let rec: CharacterRecord<i64> = CharacterRecord {
            glyph: "あ".to_string(),
            strokes: vec![Vec::new()],
        };
        assert!(normalize_record(rec).is_none());
    }
}
