//! Client library for the heatmaps.tf Team Fortress 2 kill statistics API.
//!
//! heatmaps.tf aggregates kill events reported by community TF2 servers and
//! serves them as JSON: a list of maps with kill counts, plus filterable
//! per-map kill records. This crate wraps both endpoints behind a typed,
//! rate-limited client. Calls are spaced a configurable minimum interval
//! apart (500 ms by default), filter values are checked against the fixed
//! vocabularies before anything is sent, and responses come back either raw
//! or enriched with human-readable names for the numeric codes.
//!
//! # Example
//!
//! ```no_run
//! use heatmaps_tf::{HeatmapsClient, KillDataQuery};
//!
//! # async fn run() -> Result<(), heatmaps_tf::ApiError> {
//! let client = HeatmapsClient::new()?;
//!
//! for map in client.get_map_statistics().await? {
//!     println!("{}: {} kills", map.name, map.kill_count);
//! }
//!
//! let query = KillDataQuery {
//!     killer_classes: vec!["spy".to_string()],
//!     limit: 10,
//!     ..Default::default()
//! };
//! for kill in client.get_kill_data("ctf_2fort", &query).await? {
//!     println!("{:?} with {:?}", kill.customkill_name, kill.killer_weapon_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - `client`: The API client and kill-data query filters.
//! - `config`: Client configuration and environment loading.
//! - `enrichment`: Raw-response to enriched-record transformation.
//! - `errors`: Error handling types.
//! - `lookups`: Fixed vocabularies and code-to-name tables.
//! - `models`: Response entities.

pub mod client;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod lookups;
pub mod models;

mod rate_limit;

pub use client::{HeatmapsClient, KillDataQuery, DEFAULT_KILL_LIMIT};
pub use config::HeatmapsConfig;
pub use errors::ApiError;
pub use models::{KillRecord, MapStatistic};
