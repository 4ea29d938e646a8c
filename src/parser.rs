// Line grammar. One regex for the entry shape plus the substring probes the
// metrics are derived from; all matching lives here so the processor stays
// pure I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Level, LogEntry};

/// Messages counted as API traffic.
pub const API_REQUEST_MARKER: &str = "API request";
/// Messages counted as failed API traffic. A failure line also carries the
/// request marker, so it bumps both counters.
pub const API_FAILED_MARKER: &str = "API request failed";

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(?P<date>\d{4}-\d{2}-\d{2}) (?P<time>\d{2}:\d{2}:\d{2})\] (?P<server>\S+) (?P<level>INFO|WARN|ERROR) (?P<message>.+)$",
    )
    .expect("line pattern compiles")
});

static USER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"User '(.+?)'").expect("user pattern compiles"));

/// Parses one raw line, whitespace-trimmed. `None` means the line does not
/// match the entry grammar; it is skipped and touches no counter.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let caps = LINE_PATTERN.captures(line.trim())?;
    let level = Level::from_token(&caps["level"])?;
    Some(LogEntry {
        date: caps["date"].to_string(),
        time: caps["time"].to_string(),
        server: caps["server"].to_string(),
        level,
        message: caps["message"].to_string(),
    })
}

/// Pulls the quoted username out of a message, if any. The substring guard
/// runs first; most lines mention no user and skip the regex entirely.
/// A mention of "User" without a quoted name yields `None`.
pub fn extract_username(message: &str) -> Option<&str> {
    if !message.contains("User") {
        return None;
    }
    USER_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
