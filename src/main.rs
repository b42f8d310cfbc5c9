use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use nft_doctor::{diagnose_target, DoctorConfig, NoopSink, ProgressSink, Report, ReportFormat};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nft-doctor")]
#[command(
    version,
    about = "Diagnoses an NFT asset-chain indexing API against known ledger histories",
    long_about = None
)]
struct Cli {
    /// Base address of the asset-chain API, e.g. http://localhost:1919
    url: Option<String>,

    /// Report format: text, json or html
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress per-case progress lines
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Streams one colored status line per case to stdout
struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn append_line(&mut self, line: &str) {
        if line.starts_with("err:") {
            println!("{}", line.bright_red());
        } else {
            println!("{}", line.bright_green());
        }
    }
}

fn render(report: &Report, format: ReportFormat, target: &str) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => report.to_text(),
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Html => report.to_html(target),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let format = ReportFormat::from_str(&cli.format)?;
    let config = DoctorConfig::load_or_default(cli.config.as_deref())?;

    let target = match cli.url.or_else(|| config.base_url.clone()) {
        Some(target) => target,
        None => bail!("no target given; pass a base URL or set base_url in the config file"),
    };

    info!("nft-doctor v{}", env!("CARGO_PKG_VERSION"));
    println!("Inspecting NFT API at: {}", target.bright_cyan());

    let mut sink: Box<dyn ProgressSink> = if cli.quiet {
        Box::new(NoopSink)
    } else {
        Box::new(ConsoleSink)
    };

    let rt = tokio::runtime::Runtime::new()?;
    let report =
        rt.block_on(diagnose_target(&target, config.timeout(), sink.as_mut()))?;

    match cli.output {
        Some(path) => {
            report.save(&path, format, &target)?;
            println!("report written to {}", path.display());
        }
        None => {
            println!();
            println!("{}", render(&report, format, &target)?);
        }
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
