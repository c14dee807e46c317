use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tdicc::config::Config;
use tdicc::stats::Statistics;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tdicc", about = "Convert Tomoe .tdic stroke dictionaries to normalized JSON")]
struct Cli {
    /// Input file(s) or directory (default: from config)
    inputs: Vec<PathBuf>,

    /// Output file, `-` for stdout (default: from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Variant-block marker character (repeatable; replaces the defaults)
    #[arg(long = "variant-marker")]
    variant_markers: Vec<char>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Do not print glyph statistics
    #[arg(long)]
    no_stats: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config JSON in {}", path.display()))
}

fn find_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    for p in ["tdicc.config.json", "config/tdicc.config.json"] {
        let path = Path::new(p);
        if path.is_file() {
            return load_config(path);
        }
    }
    Ok(Config::default())
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = find_config(cli.config.as_deref())?;

    // CLI overrides
    if !cli.inputs.is_empty() {
        config.input = cli.inputs;
    }
    if let Some(output) = cli.output {
        config.output = if output.as_os_str() == "-" {
            None
        } else {
            Some(output)
        };
    }
    if !cli.variant_markers.is_empty() {
        config.variant_markers = cli.variant_markers;
    }
    if cli.pretty {
        config.pretty = true;
    }
    if cli.no_stats {
        config.stats = false;
    }

    let files = tdicc::collect_inputs(&config.input)?;

    info!("reading {} file(s)", files.len());
    let text = tdicc::read_inputs(&files)?;

    info!("parsing and normalizing strokes");
    let characters = tdicc::convert(&text, &config)?;
    let points: usize = characters.iter().map(|c| c.point_count()).sum();
    info!("found {} characters ({} points)", characters.len(), points);

    let json = tdicc::emit::emit_json(&characters, &config).context("cannot serialize output")?;
    match &config.output {
        Some(path) => {
            write_output(path, &json)?;
            info!("saved to {}", path.display());
        }
        None => print!("{}", json),
    }

    if config.stats {
        eprintln!("{}", Statistics::collect(&characters));
    }
    Ok(())
}
