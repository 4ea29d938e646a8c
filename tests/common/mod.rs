// Shared test helpers

use std::path::{Path, PathBuf};

use logmill::config::{AppConfig, InputConfig, OutputConfig};
use logmill::models::{Level, LogEntry};

/// Writes a log fixture into `dir`, one line per slice element.
#[allow(dead_code)]
pub async fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    tokio::fs::write(&path, lines.join("\n"))
        .await
        .expect("write log fixture");
    path
}

/// Config pointing the pipeline at `root/logs` with artifacts under
/// `root/out`.
#[allow(dead_code)]
pub fn config_in(root: &Path) -> AppConfig {
    AppConfig {
        input: InputConfig {
            directory: root.join("logs"),
        },
        output: OutputConfig {
            entry_archive: root.join("out/processed_logs.json"),
            insights: root.join("out/insights.json"),
        },
    }
}

#[allow(dead_code)]
pub fn entry(date: &str, time: &str, server: &str, level: Level, message: &str) -> LogEntry {
    LogEntry {
        date: date.to_string(),
        time: time.to_string(),
        server: server.to_string(),
        level,
        message: message.to_string(),
    }
}
