use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use summary_markup_config::{Config, OutputFormat};
use summary_markup_engine::{Document, io as summary_io, outline, segment};

#[derive(Parser)]
#[command(name = "summary-markup")]
#[command(about = "Parse a narrative summary and print its block structure")]
struct Cli {
    /// Summary file to parse (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output format: `outline` or `toml` (defaults to the config file's choice)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            Config::default()
        }
    };

    let format = cli.format.unwrap_or(config.default_format);
    let doc = load_document(cli.input.as_deref(), &config)?;

    log::debug!("Rendering {} blocks as {format}", doc.len());
    print!("{}", render(&doc, format)?);
    Ok(())
}

/// Reads the summary named on the command line, or stdin for `None`/`-`.
fn load_document(input: Option<&Path>, config: &Config) -> Result<Document> {
    match input {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => {
            let path = config.resolve_summary(path);
            summary_io::parse_file(&path)
                .with_context(|| format!("Failed to parse summary {}", path.display()))
        }
    }
}

fn read_stdin() -> Result<Document> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read summary from stdin")?;
    Ok(segment(&text))
}

fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Outline => Ok(outline(doc)),
        OutputFormat::Toml => toml::to_string_pretty(doc).context("Failed to serialize document"),
    }
}
