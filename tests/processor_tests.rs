// Processor tests: per-file fold, malformed-line skipping, idempotence,
// read-failure isolation

mod common;

use logmill::error::PipelineError;
use logmill::models::Level;
use logmill::processor::process_file;
use tempfile::TempDir;

#[tokio::test]
async fn test_partial_result_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let path = common::write_log(
        dir.path(),
        "app.log",
        &[
            "[2024-01-01 10:00:00] srv1 INFO first",
            "[2024-01-01 10:00:01] srv1 WARN second",
            "[2024-01-01 10:00:02] srv2 ERROR third",
        ],
    )
    .await;

    let partial = process_file(&path).await.expect("process");
    let messages: Vec<_> = partial.entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["first", "second", "third"]);
    assert_eq!(partial.levels.info, 1);
    assert_eq!(partial.levels.warn, 1);
    assert_eq!(partial.levels.error, 1);
}

#[tokio::test]
async fn test_malformed_lines_contribute_nothing() {
    let dir = TempDir::new().unwrap();
    let path = common::write_log(
        dir.path(),
        "app.log",
        &[
            "not a log line",
            "",
            "[2024-01-01 10:00:00] srv1 INFO User 'alice' logged in",
            "    at com.example.Main.run(Main.java:42)",
        ],
    )
    .await;

    let partial = process_file(&path).await.expect("process");
    assert_eq!(partial.entries.len(), 1);
    assert_eq!(partial.entries[0].level, Level::Info);
    assert_eq!(partial.levels.info, 1);
    assert_eq!(partial.levels.warn, 0);
    assert_eq!(partial.levels.error, 0);
    assert_eq!(partial.users["alice"].actions, 1);
    assert_eq!(partial.users["alice"].last_seen, "2024-01-01 10:00:00");
    assert_eq!(partial.api.total, 0);
}

#[tokio::test]
async fn test_failed_api_request_bumps_both_counters() {
    let dir = TempDir::new().unwrap();
    let path = common::write_log(
        dir.path(),
        "api.log",
        &[
            "[2024-01-01 10:00:00] srv1 ERROR API request failed",
            "[2024-01-01 10:00:01] srv1 INFO API request ok",
            "[2024-01-01 10:00:02] srv1 INFO unrelated",
        ],
    )
    .await;

    let partial = process_file(&path).await.expect("process");
    assert_eq!(partial.api.total, 2);
    assert_eq!(partial.api.failed, 1);
}

#[tokio::test]
async fn test_repeated_user_updates_last_seen() {
    let dir = TempDir::new().unwrap();
    let path = common::write_log(
        dir.path(),
        "users.log",
        &[
            "[2024-01-01 10:00:00] srv1 INFO User 'alice' logged in",
            "[2024-01-01 10:05:00] srv1 INFO User 'alice' changed password",
        ],
    )
    .await;

    let partial = process_file(&path).await.expect("process");
    assert_eq!(partial.users["alice"].actions, 2);
    assert_eq!(partial.users["alice"].last_seen, "2024-01-01 10:05:00");
}

#[tokio::test]
async fn test_reprocessing_an_unmodified_file_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = common::write_log(
        dir.path(),
        "app.log",
        &[
            "[2024-01-01 10:00:00] srv1 INFO User 'alice' logged in",
            "[2024-01-01 10:00:01] srv1 ERROR API request failed",
            "garbage in between",
            "[2024-01-01 10:00:02] srv2 WARN disk almost full",
        ],
    )
    .await;

    let first = process_file(&path).await.expect("first pass");
    let second = process_file(&path).await.expect("second pass");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_file_is_a_file_read_error() {
    let dir = TempDir::new().unwrap();
    let err = process_file(&dir.path().join("gone.log")).await.unwrap_err();
    assert!(matches!(err, PipelineError::FileRead { .. }));
}

#[tokio::test]
async fn test_invalid_utf8_mid_stream_is_a_file_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.log");
    let mut bytes = b"[2024-01-01 10:00:00] srv1 INFO ok\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd, b'\n']);
    tokio::fs::write(&path, bytes).await.unwrap();

    let err = process_file(&path).await.unwrap_err();
    assert!(matches!(err, PipelineError::FileRead { .. }));
}
