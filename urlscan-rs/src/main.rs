//! urlscan: evaluate URL heuristics against a labeled CSV dataset

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urlscan_rs::config::MalformedPolicy;
use urlscan_rs::dataset::load_csv;
use urlscan_rs::eval::render;
use urlscan_rs::{Pipeline, ReportFormat, ScanConfig};

#[derive(Parser, Debug)]
#[command(name = "urlscan", version, about = "Score URL heuristics against labeled data")]
struct Cli {
    /// CSV file with url and category columns
    dataset: PathBuf,

    /// TOML file overriding the default rule set
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Evaluate on all cores
    #[arg(long)]
    parallel: bool,

    /// Fail on the first row missing a url or category
    #[arg(long)]
    abort_on_malformed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlscan_rs=info,urlscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!("Starting urlscan v{}", env!("CARGO_PKG_VERSION"));

    let mut config = if let Some(ref path) = cli.config {
        info!("Loading configuration from {}", path.display());
        ScanConfig::from_file(path)?
    } else {
        info!("No config file specified, using built-in rules");
        ScanConfig::default()
    };

    if cli.abort_on_malformed {
        config.dataset.on_malformed = MalformedPolicy::Abort;
    }

    let dataset = load_csv(&cli.dataset, &config.dataset)?;
    info!(
        "Loaded {} records ({} malformed rows skipped)",
        dataset.records.len(),
        dataset.skipped
    );

    let pipeline = Pipeline::new(&config)?;
    let report = if cli.parallel {
        pipeline.run_parallel(&dataset.records)
    } else {
        pipeline.run(&dataset.records)
    };
    let report = report.with_skipped(dataset.skipped);

    println!("{}", render(&report, cli.format)?.trim_end());

    Ok(())
}
