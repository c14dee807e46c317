use crate::config::Config;
use crate::ir::NormalizedCharacter;

/// Serializes records as a JSON array. Glyphs are written as UTF-8, not
/// `\u` escapes.
pub fn emit_json(records: &[NormalizedCharacter], config: &Config) -> serde_json::Result<String> {
    let mut out = if config.pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    out.push('\n');
    Ok(out)
}
