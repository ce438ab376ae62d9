//! Privacy CLI Binary
//!
//! Reads a matter document and prints the JSON report on stdout. Logs go to
//! stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use privacy_cli::{build_report, Mode};
use privacy_engine::Matter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "privacy-cli")]
#[command(
    version,
    about = "Privacy statute applicability detection and compliance gap analysis"
)]
struct Args {
    /// Matter JSON document, or - for stdin
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Pipeline stages to run
    #[arg(short, long, value_enum, default_value_t = Mode::Full)]
    mode: Mode,

    /// Confirmed jurisdictions, overriding the matter's own selection
    #[arg(short, long, num_args = 1..)]
    confirm: Option<Vec<String>>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read matter from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read matter from {}", input.display()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting privacy-cli v{}", env!("CARGO_PKG_VERSION"));

    let json = read_input(&args.input)?;
    let matter = Matter::from_json(&json).context("failed to parse matter document")?;
    let report = build_report(&matter, args.mode, args.confirm.as_deref())?;

    let out = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{out}");

    Ok(())
}
