// Artifact writes: the entry archive (JSON array) and the insights summary
// (JSON object). The two targets are disjoint, so the writes overlap; both
// are always attempted, and neither is rolled back when the other fails.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::PipelineError;
use crate::models::{Insights, LogEntry};

/// Writes both artifacts, truncating whatever a previous run left there.
/// On double failure the archive's error is the one reported.
pub async fn write_artifacts(
    output: &OutputConfig,
    entries: &[LogEntry],
    insights: &Insights,
) -> Result<(), PipelineError> {
    let (archive, summary) = tokio::join!(
        write_json(&output.entry_archive, entries),
        write_json(&output.insights, insights),
    );
    archive?;
    summary
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let write_failed = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serde_json::to_vec_pretty(value).map_err(|e| write_failed(e.into()))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(write_failed)?;
    }
    let len = bytes.len();
    tokio::fs::write(path, bytes).await.map_err(write_failed)?;
    debug!(path = %path.display(), bytes = len, "artifact written");
    Ok(())
}
