// Domain models shared by the pipeline stages

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Log severity; serializes to the uppercase wire form (e.g. "INFO").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse from the captured level token ("INFO", "WARN", "ERROR").
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Level::Info),
            "WARN" => Some(Level::Warn),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }
}

/// One parsed log line. Date and time stay as captured strings; nothing
/// downstream needs calendar math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub time: String,
    pub server: String,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// "<date> <time>", the form recorded as a user's last_seen.
    pub fn timestamp(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub actions: u64,
    pub last_seen: String,
}

/// Per-level tallies. All three keys appear in output even at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    #[serde(rename = "INFO")]
    pub info: u64,
    #[serde(rename = "WARN")]
    pub warn: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
}

impl LevelCounts {
    pub fn bump(&mut self, level: Level) {
        match level {
            Level::Info => self.info += 1,
            Level::Warn => self.warn += 1,
            Level::Error => self.error += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCounters {
    pub total: u64,
    pub failed: u64,
}

/// One file's contribution, owned by a single processor task until it is
/// handed over the join boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialResult {
    pub entries: Vec<LogEntry>,
    pub levels: LevelCounts,
    pub users: HashMap<String, UserStats>,
    pub api: ApiCounters,
}

/// The merged whole. BTreeMap keeps serialized user order stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    pub entries: Vec<LogEntry>,
    pub levels: LevelCounts,
    pub users: BTreeMap<String, UserStats>,
    pub api: ApiCounters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    pub failed: u64,
    pub total: u64,
    pub error_rate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Entries that made it into the archive.
    pub total_logs: u64,
    /// Files the scanner discovered, processed successfully or not.
    pub total_files: u64,
}

/// The derived-metrics artifact. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub log_count: LevelCounts,
    pub user_activity: BTreeMap<String, UserStats>,
    pub api_errors: ApiErrors,
    pub metadata: RunMetadata,
}

/// Operational summary of one pass, for logs and embedding callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub entries_archived: usize,
}
