pub mod config;
pub mod emit;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod parse;
pub mod stats;

use anyhow::{bail, Context};
use config::Config;
use error::ParseError;
use ir::NormalizedCharacter;
use regex::Regex;
use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

static RE_TDIC_EXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.tdic$").unwrap());

pub fn convert(text: &str, config: &Config) -> Result<Vec<NormalizedCharacter>, ParseError> {
    let records = parse::parse(text, config)?;
    let parsed = records.len();

    let normalized: Vec<NormalizedCharacter> = records
        .into_iter()
        .filter_map(normalize::normalize_record)
        .collect();

    debug!(parsed, kept = normalized.len(), "normalized characters");
    Ok(normalized)
}

/// Expands directories into their `.tdic` files. Paths named directly are
/// taken as-is whatever their extension.
pub fn list_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in std::fs::read_dir(p)? {
                let sub_path = entry?.path();
                if sub_path.is_dir() {
                    out.extend(list_files(&[sub_path])?);
                } else if sub_path.is_file()
                    && sub_path.to_str().is_some_and(|s| RE_TDIC_EXT.is_match(s))
                {
                    out.push(sub_path);
                }
            }
        } else if p.is_file() {
            out.push(p.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", p.display()),
            ));
        }
    }

    out.sort();
    Ok(out)
}

/// `list_files` for the configured inputs; finding nothing is an error.
pub fn collect_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let files = list_files(inputs).context("cannot collect input files")?;
    if files.is_empty() {
        bail!("no input files found");
    }
    Ok(files)
}

/// Reads and joins the input files. A blank line goes between files so a
/// trailing variant block cannot swallow the next file's first entry.
pub fn read_inputs(files: &[PathBuf]) -> anyhow::Result<String> {
    let mut all_text = String::new();
    for fp in files {
        if !all_text.is_empty() {
            all_text.push_str("\n\n");
        }
        let content = std::fs::read_to_string(fp)
            .with_context(|| format!("cannot read {}", fp.display()))?;
        all_text.push_str(&content);
    }
    Ok(all_text)
}
