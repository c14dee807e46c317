use crate::config::Config;
use crate::error::ParseError;
use crate::ir::{CharacterRecord, Point, RawCharacter, Stroke};
use tracing::debug;

const COUNT_MARKER: char = ':';

/// Position in the trimmed line list. Lines are only consumed by `advance`,
/// so a caller can look at a line and leave it for the next pass.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        LineCursor {
            lines: text.trim().split('\n').map(str::trim).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// 1-based number of the line under the cursor.
    fn line_no(&self) -> usize {
        self.pos + 1
    }
}

fn is_variant_marker(line: &str, markers: &[char]) -> bool {
    line.chars().next().is_some_and(|c| markers.contains(&c))
}

fn parse_pair(text: &str) -> Option<Point<i64>> {
    let mut parts = text.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Parses `<n> (X1 Y1) (X2 Y2) ...`. The leading count is ignored and
/// fragments that are not two integers are dropped.
pub fn parse_stroke_line(line: &str) -> Stroke<i64> {
    line.split(')')
        .filter_map(|fragment| {
            let (_, inner) = fragment.trim().split_once('(')?;
            parse_pair(inner)
        })
        .collect()
}

pub fn parse(text: &str, config: &Config) -> Result<Vec<RawCharacter>, ParseError> {
    let mut cursor = LineCursor::new(text);
    let mut records: Vec<RawCharacter> = Vec::new();

    while let Some(line) = cursor.peek() {
        if line.is_empty() {
            cursor.advance();
            continue;
        }

        // Variant block: runs until the next blank line, which is left for
        // the blank-line branch above.
        if is_variant_marker(line, &config.variant_markers) {
            let start = cursor.line_no();
            cursor.advance();
            while cursor.peek().is_some_and(|l| !l.is_empty()) {
                cursor.advance();
            }
            debug!(line = start, "skipped variant block");
            continue;
        }

        if line.starts_with(COUNT_MARKER) {
            debug!(line = cursor.line_no(), "skipped orphan stroke count");
            cursor.advance();
            continue;
        }

        let glyph = line;
        cursor.advance();

        let Some(count_line) = cursor.peek() else {
            break;
        };
        let Some(count_text) = count_line.strip_prefix(COUNT_MARKER) else {
            debug!(glyph, line = cursor.line_no(), "glyph without stroke count");
            continue;
        };
        let declared: i64 = count_text.trim().parse().map_err(|_| ParseError::InvalidStrokeCount {
            line: cursor.line_no(),
            glyph: glyph.to_string(),
            value: count_text.to_string(),
        })?;
        cursor.advance();

        // Each of the `declared` slots inspects one line. A blank line is not
        // consumed, so every remaining slot would land on it: the block ends.
        let mut strokes: Vec<Stroke<i64>> = Vec::new();
        for _ in 0..declared {
            let Some(stroke_line) = cursor.peek() else {
                break;
            };
            if stroke_line.is_empty() {
                break;
            }
            cursor.advance();
            let stroke = parse_stroke_line(stroke_line);
            if !stroke.is_empty() {
                strokes.push(stroke);
            }
        }

        if strokes.is_empty() {
            debug!(glyph, "dropped glyph with no usable strokes");
            continue;
        }
        records.push(CharacterRecord {
            glyph: glyph.to_string(),
            strokes,
        });
    }
    Ok(records)
}
