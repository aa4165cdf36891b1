use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ua_stylesheet::{
    parse_app_version, AppVersion, MarkupWriter, SelectorConfig, StylesheetSelector,
};

/// Pick the stylesheet a legacy page would load for a browser.
#[derive(Debug, Parser)]
#[command(name = "ua-stylesheet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Select a browser/platform stylesheet from a User-Agent string")]
struct Cli {
    /// User-Agent string to classify
    #[arg(short, long, conflicts_with = "batch", required_unless_present = "batch")]
    user_agent: Option<String>,

    /// Host-reported browser version; only its leading integer is used
    #[arg(short = 'v', long, default_value = "")]
    app_version: String,

    /// File with one User-Agent per line
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// YAML file overriding `base_url` and `suffix`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the stylesheet identifier instead of a <link> element
    #[arg(long)]
    print_choice: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SelectorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SelectorConfig::default(),
    };
    let selector = StylesheetSelector::with_config(config)?;
    let version = parse_app_version(&cli.app_version);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.batch {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return write_batch(&selector, &content, version, &mut out);
    }

    let ua = cli.user_agent.as_deref().unwrap_or_default();
    write_single(&selector, ua, version, cli.print_choice, &mut out)
}

/// Markup (or the bare identifier) for one user agent; nothing when no
/// stylesheet is selected.
fn write_single(
    selector: &StylesheetSelector,
    ua: &str,
    version: AppVersion,
    print_choice: bool,
    out: &mut impl Write,
) -> Result<()> {
    if print_choice {
        if let Some(choice) = selector.select(ua, version) {
            writeln!(out, "{choice}")?;
        }
    } else {
        selector.inject(&mut MarkupWriter::new(out), ua, version)?;
    }
    Ok(())
}

/// One `<choice or ->\t<user agent>` row per input line, in input order.
/// Blank lines are an empty user agent and still get a row.
fn write_batch(
    selector: &StylesheetSelector,
    content: &str,
    version: AppVersion,
    out: &mut impl Write,
) -> Result<()> {
    let inputs: Vec<(&str, AppVersion)> = content
        .lines()
        .map(|line| (line.trim(), version))
        .collect();

    for ((ua, _), choice) in inputs.iter().zip(selector.select_many(&inputs)) {
        let id = choice.map(|c| c.as_str()).unwrap_or("-");
        writeln!(out, "{id}\t{ua}")?;
    }
    Ok(())
}
