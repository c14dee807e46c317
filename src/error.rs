use std::fmt;

/// Failure that aborts a parse. Every other malformation is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text after a `:` marker is not an integer.
    InvalidStrokeCount {
        line: usize,
        glyph: String,
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidStrokeCount { line, glyph, value } => write!(
                f,
                "line {}: invalid stroke count {:?} for glyph {:?}",
                line, value, glyph
            ),
        }
    }
}

impl std::error::Error for ParseError {}
