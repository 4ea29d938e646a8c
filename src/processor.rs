// Per-file stage: read lines, keep the ones that parse, fold them into a
// PartialResult. Any I/O failure on the file surfaces as FileRead and costs
// only this file's contribution.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::aggregator::merge;
use crate::error::PipelineError;
use crate::models::PartialResult;
use crate::parser;

/// Processes one log file into its partial result. Processing an unmodified
/// file twice yields equal results.
pub async fn process_file(path: &Path) -> Result<PartialResult, PipelineError> {
    let read_failed = |source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(read_failed)?;
    let mut lines = BufReader::new(file).lines();

    let mut partial = PartialResult::default();
    while let Some(line) = lines.next_line().await.map_err(read_failed)? {
        if let Some(entry) = parser::parse_line(&line) {
            merge::record_entry(&mut partial, entry);
        }
    }
    Ok(partial)
}
