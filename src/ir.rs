use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

// Written as `[x, y]`, the shape the recognizer's data loader expects.
impl<T: Serialize> Serialize for Point<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.x, &self.y).serialize(serializer)
    }
}

pub type Stroke<T> = Vec<Point<T>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterRecord<T> {
    #[serde(rename = "char")]
    pub glyph: String,
    pub strokes: Vec<Stroke<T>>,
}

pub type RawCharacter = CharacterRecord<i64>;
pub type NormalizedCharacter = CharacterRecord<f64>;

impl<T> CharacterRecord<T> {
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }
}
