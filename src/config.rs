use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: Vec<PathBuf>,

    /// `None` writes to stdout.
    #[serde(default = "default_output")]
    pub output: Option<PathBuf>,

    /// Lines starting with one of these open a variant block.
    #[serde(default = "default_variant_markers")]
    pub variant_markers: Vec<char>,

    #[serde(default)]
    pub pretty: bool,

    #[serde(default = "default_stats")]
    pub stats: bool,
}

fn default_input() -> Vec<PathBuf> {
    vec![PathBuf::from("temp_tomoe_data/all.tdic")]
}
fn default_output() -> Option<PathBuf> {
    Some(PathBuf::from("src/data/characters.json"))
}
fn default_variant_markers() -> Vec<char> {
    vec!['旧', '新']
}
fn default_stats() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            output: default_output(),
            variant_markers: default_variant_markers(),
            pretty: false,
            stats: true,
        }
    }
}
