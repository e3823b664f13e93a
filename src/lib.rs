//! Hitachi Drive Mackerel Plugin
//!
//! A mackerel-agent metrics plugin reporting physical drive health for
//! Hitachi storage arrays.
//!
//! # Overview
//!
//! The plugin is a short-lived process, invoked periodically by the agent.
//! Each run issues one authenticated GET against the array's
//! ConfigurationManager REST API, classifies every drive's status code, and
//! prints a flat snapshot of per-drive metrics in the agent's wire format.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      HTTP (basic auth)     ┌──────────────┐
//! │  Hitachi    │ ◄────────────────────────  │    Plugin    │
//! │  array API  │   GET /objects/drives      │              │
//! └─────────────┘                            │  ┌────────┐  │    stdout    ┌────────────────┐
//!                                            │  │ Client │  │ ───────────► │ mackerel-agent │
//!                                            │  └────────┘  │  key\tval\tts └────────────────┘
//!                                            │  ┌────────┐  │
//!                                            │  │Metrics │  │
//!                                            │  └────────┘  │
//!                                            └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`hitachi`] - API client, wire types, and drive status classification
//! - [`metrics`] - graph catalog and snapshot building
//! - [`mackerel`] - the agent's wire format (schema and value output)
//! - [`plugin`] - per-invocation orchestration
//! - [`config`] - configuration
//! - [`error`] - error types
//!
//! # Quick Start
//!
//! ```no_run
//! use mackerel_plugin_hitachi_drive::config::{ArrayConfig, Config};
//! use mackerel_plugin_hitachi_drive::plugin;
//! use secrecy::SecretString;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         array: ArrayConfig {
//!             host: "192.0.2.10:23450".to_string(),
//!             user_id: "maintenance".to_string(),
//!             password: SecretString::from("raid-password"),
//!         },
//!         tempfile: None,
//!     };
//!     plugin::run(config).await
//! }
//! ```
//!
//! # Metrics
//!
//! - `hitachi.drive.status.<serial>.{nml,war,cpy,cpi,rsv,fai,blk,unknown}` -
//!   one-hot drive status
//! - `hitachi.drive.used.<serial>.used` - flash wear level percentage

pub mod config;
pub mod error;
pub mod hitachi;
pub mod mackerel;
pub mod metrics;
pub mod plugin;
