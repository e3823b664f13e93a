//! Metric Definitions and Snapshot Building
//!
//! This module defines the static graph catalog the plugin reports under and
//! builds the per-run value snapshot from classified drive records.
//!
//! # Metric Groups
//!
//! Group keys are templated with `#`, which the agent treats as a wildcard
//! and this plugin fills with the drive serial number:
//!
//! - `hitachi.drive.status.#` - one-hot drive status
//!   - Sub-metrics: `nml`, `war`, `cpy`, `cpi`, `rsv`, `fai`, `blk`,
//!     `unknown`; exactly one is 1 per drive per run, the rest 0
//! - `hitachi.drive.used.#` - flash wear level
//!   - Sub-metric: `used`, the endurance indicator percentage as reported
//!
//! The catalog is built once per process and never mutated. The snapshot is
//! the full cross product of drives and metric definitions, rebuilt fresh on
//! every run with no carried-over state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::hitachi::types::{DriveInfo, DriveStatus};

/// Marker in a group key that stands for the drive serial number.
const SERIAL_PLACEHOLDER: char = '#';

/// Group key of the one-hot status metrics.
pub const STATUS_GRAPH_KEY: &str = "hitachi.drive.status.#";

/// Group key of the endurance indicator metric.
pub const USED_GRAPH_KEY: &str = "hitachi.drive.used.#";

/// One sub-metric under a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDef {
    pub name: &'static str,
    pub label: &'static str,
    pub stacked: bool,
}

/// Display metadata and sub-metrics for one metric group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDef {
    pub label: &'static str,
    pub unit: &'static str,
    pub metrics: Vec<MetricDef>,
}

/// Flat mapping from fully-qualified metric key to value, rebuilt per run.
///
/// Sorted keys keep the emitted output deterministic. Serial numbers are
/// assumed unique per array; a duplicate silently overwrites.
pub type MetricSnapshot = BTreeMap<String, f64>;

/// Build the static graph catalog.
pub fn graph_definitions() -> BTreeMap<&'static str, GraphDef> {
    let status_metrics = DriveStatus::ALL
        .iter()
        .map(|status| MetricDef {
            name: status.metric_name(),
            label: status.label(),
            stacked: false,
        })
        .collect();

    BTreeMap::from([
        (
            STATUS_GRAPH_KEY,
            GraphDef {
                label: "Drive Status",
                unit: "integer",
                metrics: status_metrics,
            },
        ),
        (
            USED_GRAPH_KEY,
            GraphDef {
                label: "Drive used Endurance Indicator(%)",
                unit: "integer",
                metrics: vec![MetricDef {
                    name: "used",
                    label: "Used",
                    stacked: false,
                }],
            },
        ),
    ])
}

/// Build the value snapshot: every drive crossed with every metric
/// definition, no filtering.
pub fn build_snapshot(
    graphs: &BTreeMap<&'static str, GraphDef>,
    drives: &[DriveInfo],
) -> MetricSnapshot {
    let mut snapshot = MetricSnapshot::new();

    for drive in drives {
        for (group_key, graph) in graphs {
            for metric in &graph.metrics {
                let key = metric_key(group_key, &drive.serial_number, metric.name);
                snapshot.insert(key, metric_value(group_key, metric, drive));
            }
        }
    }

    snapshot
}

/// Build the fully-qualified key for one drive and sub-metric.
///
/// Only the placeholder that is part of the group key itself is substituted,
/// so a serial number containing the marker is never expanded again.
fn metric_key(group_key: &str, serial: &str, name: &str) -> String {
    match group_key.split_once(SERIAL_PLACEHOLDER) {
        Some((before, after)) => format!("{}{}{}.{}", before, serial, after, name),
        None => format!("{}.{}", group_key, name),
    }
}

/// Value of one sub-metric for one drive.
fn metric_value(group_key: &str, metric: &MetricDef, drive: &DriveInfo) -> f64 {
    match group_key {
        STATUS_GRAPH_KEY => {
            if metric.name == drive.status.metric_name() {
                1.0
            } else {
                0.0
            }
        }
        USED_GRAPH_KEY => drive.used_endurance_indicator as f64,
        _ => 0.0,
    }
}
