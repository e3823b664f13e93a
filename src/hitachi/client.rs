//! ConfigurationManager REST API client
//!
//! The drive listing is a single authenticated GET. The live client sits
//! behind the [`DriveSource`] trait so tests can substitute fixed drive
//! lists without touching the network.
//!
//! # Example
//!
//! ```no_run
//! use mackerel_plugin_hitachi_drive::config::ArrayConfig;
//! use mackerel_plugin_hitachi_drive::hitachi::{DriveSource, RaidApiClient};
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ArrayConfig {
//!     host: "192.0.2.10:23450".to_string(),
//!     user_id: "maintenance".to_string(),
//!     password: SecretString::from("raid-password"),
//! };
//!
//! let client = RaidApiClient::new(config);
//! let drives = client.fetch_drives().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::ArrayConfig;
use crate::error::{PluginError, Result};
use crate::hitachi::types::{DriveInfo, DriveList, DriveStatus};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::{debug, warn};

/// Source of drive records for the metric builder.
///
/// Exactly one fetch happens per plugin run. Any error is fatal for that
/// run; there are no retries and no partial results.
#[allow(async_fn_in_trait)]
pub trait DriveSource {
    /// Fetch the current drive list, preserving the array's reporting order.
    async fn fetch_drives(&self) -> Result<Vec<DriveInfo>>;
}

/// Live client for the array's ConfigurationManager REST API.
///
/// Uses HTTP basic authentication with the configured maintenance
/// credentials. No request timeout is set; the run blocks on the transport
/// defaults.
pub struct RaidApiClient {
    http: reqwest::Client,
    config: ArrayConfig,
}

impl RaidApiClient {
    pub fn new(config: ArrayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Drive listing endpoint, with the endurance detail requested up front.
    fn drives_url(&self) -> String {
        format!(
            "http://{}/ConfigurationManager/v1/objects/drives?detailInfoType=usedEnduranceIndicator",
            self.config.host
        )
    }
}

impl DriveSource for RaidApiClient {
    async fn fetch_drives(&self) -> Result<Vec<DriveInfo>> {
        let url = self.drives_url();
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(
                &self.config.user_id,
                Some(self.config.password.expose_secret()),
            )
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(PluginError::Api(format!(
                "authentication rejected for user {:?}",
                self.config.user_id
            )));
        }

        let body = response.error_for_status()?.text().await?;
        parse_drives(&body)
    }
}

/// Decode a drive-list response body into classified drive records.
///
/// Order is preserved. A body that is not JSON, has no `data` array, or
/// contains a drive without `serialNumber`/`status` fails the whole run.
/// An unrecognized status code does not: it classifies as
/// [`DriveStatus::Unknown`] and is only logged. The endurance indicator
/// accepts any JSON number and truncates toward zero.
pub fn parse_drives(body: &str) -> Result<Vec<DriveInfo>> {
    let list: DriveList = serde_json::from_str(body)?;

    let mut drives = Vec::with_capacity(list.data.len());
    for entry in list.data {
        let status = DriveStatus::from_code(&entry.status);
        if status == DriveStatus::Unknown {
            warn!(
                "drive {}: unrecognized status code {:?}",
                entry.serial_number, entry.status
            );
        }
        drives.push(DriveInfo {
            serial_number: entry.serial_number,
            status,
            used_endurance_indicator: entry.used_endurance_indicator as i64,
        });
    }

    Ok(drives)
}
