//! ConfigurationManager API type definitions
//!
//! Rust struct definitions for the drive listing endpoint of the array's
//! ConfigurationManager REST API, plus the classified domain types built
//! from them.
//!
//! # Design Notes
//!
//! - **Required fields**: `serialNumber` and `status` have no serde default,
//!   so a drive object missing either fails deserialization and aborts the
//!   whole run. That is intentional: a response the plugin cannot fully
//!   trust produces no metrics at all.
//! - **Optional fields**: `usedEnduranceIndicator` is only reported for
//!   flash media; `#[serde(default)]` maps its absence to 0. It is decoded
//!   as a plain JSON number and truncated to a whole percentage during
//!   classification, so a fractional or exponent-form value never aborts
//!   the run.
//! - **Status codes**: classification is total. Codes outside the fixed
//!   table become [`DriveStatus::Unknown`] rather than an error, so a new
//!   firmware code shows up as an `unknown` metric instead of a dead plugin.

use serde::Deserialize;

/// Response envelope of `GET /ConfigurationManager/v1/objects/drives`.
#[derive(Debug, Deserialize)]
pub struct DriveList {
    pub data: Vec<DriveEntry>,
}

/// One physical drive as reported by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveEntry {
    pub serial_number: String,
    pub status: String,
    /// Kept as the raw JSON number; truncated when classified.
    #[serde(default)]
    pub used_endurance_indicator: f64,
}

/// Operational status of a physical drive, classified from the API's short
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveStatus {
    Normal,
    Warning,
    Copy,
    CopyIncomplete,
    Reserved,
    Failed,
    Blocked,
    Unknown,
}

impl DriveStatus {
    /// Every status, in metric-definition order.
    pub const ALL: [DriveStatus; 8] = [
        DriveStatus::Normal,
        DriveStatus::Warning,
        DriveStatus::Copy,
        DriveStatus::CopyIncomplete,
        DriveStatus::Reserved,
        DriveStatus::Failed,
        DriveStatus::Blocked,
        DriveStatus::Unknown,
    ];

    /// Classify an API status code.
    ///
    /// Matching is exact: no trimming, no case folding. Anything outside the
    /// fixed code table is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "NML" => DriveStatus::Normal,
            "WAR" => DriveStatus::Warning,
            "CPY" => DriveStatus::Copy,
            "CPI" => DriveStatus::CopyIncomplete,
            "RSV" => DriveStatus::Reserved,
            "FAI" => DriveStatus::Failed,
            "BLK" => DriveStatus::Blocked,
            _ => DriveStatus::Unknown,
        }
    }

    /// Sub-metric name under the status graph.
    pub fn metric_name(self) -> &'static str {
        match self {
            DriveStatus::Normal => "nml",
            DriveStatus::Warning => "war",
            DriveStatus::Copy => "cpy",
            DriveStatus::CopyIncomplete => "cpi",
            DriveStatus::Reserved => "rsv",
            DriveStatus::Failed => "fai",
            DriveStatus::Blocked => "blk",
            DriveStatus::Unknown => "unknown",
        }
    }

    /// Display label for the graph schema.
    pub fn label(self) -> &'static str {
        match self {
            DriveStatus::Normal => "Normal",
            DriveStatus::Warning => "Warning",
            DriveStatus::Copy => "Copy",
            DriveStatus::CopyIncomplete => "CopyIncomplete",
            DriveStatus::Reserved => "Reserved",
            DriveStatus::Failed => "Failed",
            DriveStatus::Blocked => "Blocked",
            DriveStatus::Unknown => "Unknown",
        }
    }
}

/// Classified drive record consumed by the metric builder.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveInfo {
    pub serial_number: String,
    pub status: DriveStatus,
    /// Wear level of flash media as an integer percentage; 0 when the API
    /// did not report one.
    pub used_endurance_indicator: i64,
}
