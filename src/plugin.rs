//! Plugin Orchestration
//!
//! One invocation is one of two short, sequential paths:
//!
//! - schema mode (`MACKEREL_AGENT_PLUGIN_META` set): print the static graph
//!   catalog and exit, without touching the array;
//! - value mode: fetch the drive list once, build the snapshot, print it.
//!
//! # Error Handling
//!
//! A fetch failure aborts the run before anything reaches stdout: the agent
//! sees a non-zero exit and no partial metrics. Unrecognized status codes
//! are not failures; they were already classified as `Unknown` upstream.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::hitachi::{DriveSource, RaidApiClient};
use crate::mackerel;
use crate::metrics::{self, GraphDef, MetricSnapshot};

/// The drive metrics plugin: a drive source plus the static graph catalog.
pub struct DrivePlugin<S> {
    source: S,
    graphs: BTreeMap<&'static str, GraphDef>,
}

impl<S: DriveSource> DrivePlugin<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            graphs: metrics::graph_definitions(),
        }
    }

    /// The static graph catalog, for the schema document.
    pub fn graph_definition(&self) -> &BTreeMap<&'static str, GraphDef> {
        &self.graphs
    }

    /// Fetch the drive list and build a fresh snapshot from it.
    pub async fn fetch_metrics(&self) -> Result<MetricSnapshot> {
        let drives = self.source.fetch_drives().await?;
        info!("fetched {} drives", drives.len());
        Ok(metrics::build_snapshot(&self.graphs, &drives))
    }
}

/// Run one plugin invocation against the configured array.
pub async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    let plugin = DrivePlugin::new(RaidApiClient::new(config.array.clone()));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if mackerel::schema_requested() {
        debug!("schema requested, skipping fetch");
        mackerel::write_schema(&mut out, plugin.graph_definition())?;
        return Ok(());
    }

    if let Some(path) = &config.tempfile {
        // mackerel-agent passes this to every plugin; nothing here is a
        // differential metric, so the state file stays untouched.
        debug!("tempfile {} accepted but unused", path.display());
    }

    let snapshot = plugin
        .fetch_metrics()
        .await
        .with_context(|| format!("failed to fetch drive metrics from {}", config.array.host))?;

    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    mackerel::write_values(&mut out, &snapshot, epoch)?;

    Ok(())
}
