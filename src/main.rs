mod document;
mod emit;
mod parser;
mod swatch;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use document::{HtmlDocument, DEFAULT_SELECTOR};
use emit::NameEscaping;
use parser::MalformedPolicy;

#[derive(Parser)]
#[command(
    name = "gel_scraper",
    about = "Extract colour gel swatches from a saved filter-list page as color_gel! lines"
)]
struct Cli {
    /// Saved HTML page ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// CSS selector for swatch elements
    #[arg(long, env = "GEL_SELECTOR", default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Skip elements whose background color does not parse instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Escape quotes and backslashes in swatch names
    #[arg(long)]
    escape_names: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Gel)]
    format: Format,

    /// Wrap gel lines in `pub const <NAME>: &[ColorGel]`
    #[arg(long, value_name = "NAME", value_parser = parse_ident)]
    const_name: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Gel,
    Json,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let html = read_input(cli.input.as_ref())?;
    let doc = HtmlDocument::parse(&html);

    let policy = if cli.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };
    let extraction = match parser::extract_swatches(&doc, &cli.selector, policy) {
        Ok(extraction) => extraction,
        Err(e) => {
            if parser::color_error(&e).is_some() {
                warn!("Aborted on a malformed color; --skip-malformed keeps the valid swatches");
            }
            return Err(e);
        }
    };
    info!(
        swatches = extraction.swatches.len(),
        rejected = extraction.rejected.len(),
        "Extraction finished"
    );

    let escaping = if cli.escape_names {
        NameEscaping::Rust
    } else {
        NameEscaping::Verbatim
    };
    let text = match (cli.format, cli.const_name.as_deref()) {
        (Format::Gel, None) => emit::render_lines(&extraction.swatches, escaping),
        (Format::Gel, Some(name)) => emit::render_const(name, &extraction.swatches, escaping),
        (Format::Json, name) => {
            if name.is_some() {
                warn!("--const-name has no effect with --format json");
            }
            emit::render_json(&extraction.swatches)?
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, format!("{}\n", text))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", text),
    }

    if extraction.has_rejections() {
        warn!(
            "{} element(s) skipped: {}",
            extraction.rejected.len(),
            extraction
                .rejected
                .iter()
                .map(|r| format!("#{} {:?} ({})", r.index, r.label, r.error))
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(())
}

/// A Rust identifier, so the const table compiles once pasted.
fn parse_ident(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    if starts_ok && s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(s.to_string())
    } else {
        Err(format!("{:?} is not a valid Rust identifier", s))
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read HTML from stdin")?;
            Ok(buf)
        }
    }
}
