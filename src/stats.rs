use crate::ir::CharacterRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

// Inclusive bounds, compared against the whole glyph string.
const RANGES: &[(Script, &str, &str)] = &[
    (Script::Hiragana, "\u{3040}", "\u{309F}"),
    (Script::Katakana, "\u{30A0}", "\u{30FF}"),
    (Script::Kanji, "\u{4E00}", "\u{9FAF}"),
];

pub fn classify(glyph: &str) -> Script {
    RANGES
        .iter()
        .find(|(_, lo, hi)| *lo <= glyph && glyph <= *hi)
        .map_or(Script::Other, |(script, _, _)| *script)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub hiragana: usize,
    pub katakana: usize,
    pub kanji: usize,
    pub others: usize,
}

impl Statistics {
    pub fn collect<T>(records: &[CharacterRecord<T>]) -> Self {
        let mut stats = Statistics::default();
        for record in records {
            match classify(&record.glyph) {
                Script::Hiragana => stats.hiragana += 1,
                Script::Katakana => stats.katakana += 1,
                Script::Kanji => stats.kanji += 1,
                Script::Other => stats.others += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.hiragana + self.katakana + self.kanji + self.others
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Hiragana: {}", self.hiragana)?;
        writeln!(f, "  Katakana: {}", self.katakana)?;
        writeln!(f, "  Kanji: {}", self.kanji)?;
        write!(f, "  Others: {}", self.others)
    }
}
