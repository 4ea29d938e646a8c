// Aggregation pass orchestration. File reads overlap freely (one task per
// discovered file); merges run one at a time, in sorted path order, so the
// archive order and both artifacts are reproducible run to run.

pub mod merge;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::models::{AggregateResult, PartialResult, RunReport};
use crate::{processor, scanner, writer};

/// Runs one aggregation pass: scan the configured directory, process every
/// discovered file concurrently, merge the partial results, write both
/// artifacts. A file that fails to read costs only its own contribution;
/// only a missing directory or a failed artifact write aborts the run.
#[instrument(skip(config), fields(directory = %config.input.directory.display()))]
pub async fn run_once(config: &AppConfig) -> Result<RunReport, PipelineError> {
    let files = scanner::scan_log_files(&config.input.directory).await?;
    info!(files_discovered = files.len(), "scan complete");

    let tasks: Vec<JoinHandle<Result<PartialResult, PipelineError>>> = files
        .iter()
        .map(|path| {
            let path = path.clone();
            tokio::spawn(async move { processor::process_file(&path).await })
        })
        .collect();

    let mut agg = AggregateResult::default();
    let mut report = RunReport {
        files_discovered: files.len(),
        ..Default::default()
    };

    // files is sorted, so awaiting in this order is the merge tie-break.
    for (path, task) in files.iter().zip(tasks) {
        match task.await {
            Ok(Ok(partial)) => {
                merge::merge_partial(&mut agg, partial);
                report.files_processed += 1;
            }
            Ok(Err(e)) => {
                warn!(error = %e, operation = "process_file", "file skipped");
                report.files_failed += 1;
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    operation = "process_file",
                    "processor task panicked; file skipped"
                );
                report.files_failed += 1;
            }
        }
    }
    report.entries_archived = agg.entries.len();

    let insights = merge::build_insights(&agg, report.files_discovered);
    writer::write_artifacts(&config.output, &agg.entries, &insights).await?;

    info!(
        files_discovered = report.files_discovered,
        files_processed = report.files_processed,
        files_failed = report.files_failed,
        entries_archived = report.entries_archived,
        "run complete"
    );
    Ok(report)
}

/// Where a spawned run stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Completed(RunReport),
    Failed(String),
}

/// Handle to a detached run. Dropping it does not cancel the run, so
/// fire-and-forget callers can discard it and read the artifacts later.
pub struct RunHandle {
    status_rx: watch::Receiver<RunStatus>,
    task: JoinHandle<Result<RunReport, PipelineError>>,
}

impl RunHandle {
    /// Current status, without blocking.
    pub fn status(&self) -> RunStatus {
        self.status_rx.borrow().clone()
    }

    /// Waits for the run to finish and returns its report.
    pub async fn wait(self) -> anyhow::Result<RunReport> {
        Ok(self.task.await??)
    }
}

/// Starts one aggregation pass as a detached task. The trigger interface:
/// callers get back a handle they can poll or await, not a blocking result.
pub fn spawn(config: AppConfig) -> RunHandle {
    let (status_tx, status_rx) = watch::channel(RunStatus::Running);
    let task = tokio::spawn(async move {
        let result = run_once(&config).await;
        let status = match &result {
            Ok(report) => RunStatus::Completed(*report),
            Err(e) => RunStatus::Failed(e.to_string()),
        };
        let _ = status_tx.send(status);
        result
    });
    RunHandle { status_rx, task }
}
