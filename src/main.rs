use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

use logmill::{aggregator, config};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logmill starting");

    let app_config = config::AppConfig::load()?;
    let report = aggregator::run_once(&app_config).await?;

    tracing::info!(
        files_discovered = report.files_discovered,
        files_processed = report.files_processed,
        files_failed = report.files_failed,
        entries_archived = report.entries_archived,
        "aggregation pass finished"
    );
    Ok(())
}
