use std::path::PathBuf;

use thiserror::Error;

/// Failures the pipeline distinguishes. A line that does not match the entry
/// grammar is not one of them: the parser returns `None` and the line is
/// skipped without a trace.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input directory missing or unreadable. Fatal to the run.
    #[error("log directory {} missing or unreadable: {source}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single file could not be opened or read. Costs that file's
    /// contribution only; sibling files are unaffected.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be serialized or written. Fatal to the run.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
