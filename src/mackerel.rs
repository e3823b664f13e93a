//! Mackerel Plugin Wire Format
//!
//! mackerel-agent talks to a metrics plugin in two modes. With
//! `MACKEREL_AGENT_PLUGIN_META` set in the environment it expects the graph
//! schema on stdout:
//!
//! ```text
//! # mackerel-agent-plugin
//! {"graphs":{"hitachi.drive.status.#":{"label":"Drive Status",...}}}
//! ```
//!
//! Without it, it expects one value line per metric:
//!
//! ```text
//! hitachi.drive.status.40010001.nml<TAB>1<TAB>1756100000
//! ```
//!
//! This module owns both encodings. Diffing against a previous run and the
//! agent's state file are deliberately not handled here: every metric this
//! plugin emits is a gauge.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::metrics::{GraphDef, MetricSnapshot};

/// Environment variable the agent sets when it wants the graph schema.
pub const PLUGIN_META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

/// Header line the agent requires before the schema document.
const META_HEADER: &str = "# mackerel-agent-plugin";

/// Top-level schema document.
#[derive(Serialize)]
struct GraphSchema<'a> {
    graphs: &'a BTreeMap<&'static str, GraphDef>,
}

/// True when the invoking agent asked for the graph schema instead of
/// metric values.
pub fn schema_requested() -> bool {
    std::env::var(PLUGIN_META_ENV)
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}

/// Write the schema document: the header line, then the graph definitions
/// as single-line JSON.
pub fn write_schema<W: Write>(w: &mut W, graphs: &BTreeMap<&'static str, GraphDef>) -> Result<()> {
    let doc = serde_json::to_string(&GraphSchema { graphs })?;
    writeln!(w, "{}", META_HEADER)?;
    writeln!(w, "{}", doc)?;
    Ok(())
}

/// Write one `key<TAB>value<TAB>epoch` line per metric, in key order.
///
/// Non-finite values have no representation in the agent's parser; they are
/// skipped with a warning rather than corrupting the output.
pub fn write_values<W: Write>(w: &mut W, snapshot: &MetricSnapshot, epoch: u64) -> Result<()> {
    for (key, value) in snapshot {
        if !value.is_finite() {
            warn!("skipping metric {}: non-finite value {}", key, value);
            continue;
        }
        writeln!(w, "{}\t{}\t{}", key, value, epoch)?;
    }
    Ok(())
}
