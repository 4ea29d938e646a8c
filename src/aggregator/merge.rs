// Pure fold steps: per-line into a PartialResult, per-file into the
// AggregateResult, plus the derived-metric builders. No I/O here; the
// orchestration in aggregator::mod owns ordering and error handling.

use crate::models::{
    AggregateResult, ApiCounters, ApiErrors, Insights, LogEntry, PartialResult, RunMetadata,
};
use crate::parser;

/// Folds one parsed entry into a file's accumulator: level tallied, user
/// activity bumped when a quoted username is present, API counters bumped
/// per the marker probes, entry appended in file order.
pub fn record_entry(partial: &mut PartialResult, entry: LogEntry) {
    partial.levels.bump(entry.level);

    if let Some(user) = parser::extract_username(&entry.message) {
        let stats = partial.users.entry(user.to_string()).or_default();
        stats.actions += 1;
        stats.last_seen = entry.timestamp();
    }

    if entry.message.contains(parser::API_FAILED_MARKER) {
        partial.api.failed += 1;
    }
    if entry.message.contains(parser::API_REQUEST_MARKER) {
        partial.api.total += 1;
    }

    partial.entries.push(entry);
}

/// Folds one file's results into the aggregate. Entries append in merge
/// order, counts and counters sum, a user's `actions` sum while `last_seen`
/// takes the incoming value (last write wins under the caller's ordering).
pub fn merge_partial(agg: &mut AggregateResult, partial: PartialResult) {
    agg.entries.extend(partial.entries);

    agg.levels.info += partial.levels.info;
    agg.levels.warn += partial.levels.warn;
    agg.levels.error += partial.levels.error;

    for (user, stats) in partial.users {
        let merged = agg.users.entry(user).or_default();
        merged.actions += stats.actions;
        merged.last_seen = stats.last_seen;
    }

    agg.api.total += partial.api.total;
    agg.api.failed += partial.api.failed;
}

/// Renders failed/total as a percentage rounded to two decimals. A zero
/// total yields "0%"; integral rates keep one decimal ("50.0%"); anything
/// else prints its minimal form ("33.33%").
pub fn error_rate(api: &ApiCounters) -> String {
    if api.total == 0 {
        return "0%".to_string();
    }
    let rate = api.failed as f64 / api.total as f64 * 100.0;
    let rounded = (rate * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}%")
    } else {
        format!("{rounded}%")
    }
}

/// Builds the insights document from the finalized aggregate.
/// `total_files` is the scanner's count, whether or not every file was
/// readable.
pub fn build_insights(agg: &AggregateResult, total_files: usize) -> Insights {
    Insights {
        log_count: agg.levels,
        user_activity: agg.users.clone(),
        api_errors: ApiErrors {
            failed: agg.api.failed,
            total: agg.api.total,
            error_rate: error_rate(&agg.api),
        },
        metadata: RunMetadata {
            total_logs: agg.entries.len() as u64,
            total_files: total_files as u64,
        },
    }
}
