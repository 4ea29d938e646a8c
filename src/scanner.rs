use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Lists the `.log` files directly under `dir`, sorted by path.
///
/// The sort fixes the downstream merge order, making archive order and
/// artifact bytes reproducible run to run. The filter is a name test only;
/// an entry that looks like a log file but cannot be read fails later, in
/// the processor, without taking the run down. A missing or unreadable
/// directory is fatal. An empty directory is not an error.
pub async fn scan_log_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| PipelineError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| PipelineError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        })?
    {
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.ends_with(".log")) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
