//! Plugin orchestration tests
//!
//! Runs the fetch-to-snapshot pipeline against stub drive sources, so the
//! live API client never enters the picture.

use mackerel_plugin_hitachi_drive::error::{PluginError, Result};
use mackerel_plugin_hitachi_drive::hitachi::types::{DriveInfo, DriveStatus};
use mackerel_plugin_hitachi_drive::hitachi::DriveSource;
use mackerel_plugin_hitachi_drive::metrics;
use mackerel_plugin_hitachi_drive::plugin::DrivePlugin;

/// Stub source returning a fixed drive list
struct StubSource {
    drives: Vec<DriveInfo>,
}

impl DriveSource for StubSource {
    async fn fetch_drives(&self) -> Result<Vec<DriveInfo>> {
        Ok(self.drives.clone())
    }
}

/// Stub source that always fails, standing in for an unreachable array
struct FailingSource;

impl DriveSource for FailingSource {
    async fn fetch_drives(&self) -> Result<Vec<DriveInfo>> {
        Err(PluginError::Api("connection refused".to_string()))
    }
}

fn drive(serial: &str, code: &str, used: i64) -> DriveInfo {
    DriveInfo {
        serial_number: serial.to_string(),
        status: DriveStatus::from_code(code),
        used_endurance_indicator: used,
    }
}

#[tokio::test]
async fn test_fetch_metrics_builds_full_snapshot() {
    let plugin = DrivePlugin::new(StubSource {
        drives: vec![drive("40010001", "NML", 3), drive("40010002", "BLK", 0)],
    });

    let snapshot = plugin.fetch_metrics().await.expect("fetch must succeed");

    assert_eq!(snapshot.len(), 18);
    assert_eq!(snapshot["hitachi.drive.status.40010001.nml"], 1.0);
    assert_eq!(snapshot["hitachi.drive.status.40010002.blk"], 1.0);
    assert_eq!(snapshot["hitachi.drive.status.40010002.nml"], 0.0);
    assert_eq!(snapshot["hitachi.drive.used.40010001.used"], 3.0);
    assert_eq!(snapshot["hitachi.drive.used.40010002.used"], 0.0);
}

#[tokio::test]
async fn test_fetch_metrics_with_no_drives() {
    let plugin = DrivePlugin::new(StubSource { drives: vec![] });

    let snapshot = plugin.fetch_metrics().await.expect("fetch must succeed");
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let plugin = DrivePlugin::new(FailingSource);

    let result = plugin.fetch_metrics().await;

    // A failed fetch yields an error and no metrics at all
    match result {
        Err(PluginError::Api(message)) => assert!(message.contains("connection refused")),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_graph_definition_matches_catalog() {
    let plugin = DrivePlugin::new(StubSource { drives: vec![] });

    assert_eq!(*plugin.graph_definition(), metrics::graph_definitions());
}

#[tokio::test]
async fn test_duplicate_serials_last_drive_wins() {
    // The array reports serials as unique; if one ever repeats, the later
    // record silently overwrites the earlier one
    let plugin = DrivePlugin::new(StubSource {
        drives: vec![drive("dup", "NML", 1), drive("dup", "FAI", 7)],
    });

    let snapshot = plugin.fetch_metrics().await.expect("fetch must succeed");

    assert_eq!(snapshot.len(), 9);
    assert_eq!(snapshot["hitachi.drive.status.dup.nml"], 0.0);
    assert_eq!(snapshot["hitachi.drive.status.dup.fai"], 1.0);
    assert_eq!(snapshot["hitachi.drive.used.dup.used"], 7.0);
}
