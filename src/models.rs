use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the map list returned by `data/maps.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapStatistic {
    /// Map name as used by game servers (e.g. "ctf_2fort").
    pub name: String,
    /// Total number of kills recorded for the map.
    pub kill_count: u64,
    /// Keys the server sends that this client does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One kill event from `data/kills/{map_name}.json`, named and enriched.
///
/// Raw columns are optional because callers may request a subset of fields;
/// a column that was not requested stays `None`. The `*_name` fields are
/// derived from the numeric codes during enrichment and are `None` whenever
/// a code has no entry in its lookup table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KillRecord {
    /// Row identifier.
    pub id: Option<i64>,
    /// Unix timestamp of the kill.
    pub timestamp: Option<i64>,
    /// Numeric class index of the killer.
    pub killer_class: Option<i64>,
    /// Numeric weapon code; negative values mark sentry kills.
    pub killer_weapon: Option<i64>,
    /// Killer world position, X axis.
    pub killer_x: Option<f64>,
    /// Killer world position, Y axis.
    pub killer_y: Option<f64>,
    /// Killer world position, Z axis.
    pub killer_z: Option<f64>,
    /// Numeric class index of the victim.
    pub victim_class: Option<i64>,
    /// Victim world position, X axis.
    pub victim_x: Option<f64>,
    /// Victim world position, Y axis.
    pub victim_y: Option<f64>,
    /// Victim world position, Z axis.
    pub victim_z: Option<f64>,
    /// Custom kill type code (headshots, backstabs, taunt kills, ...).
    pub customkill: Option<i64>,
    /// Engine damage bits of the killing blow.
    pub damagebits: Option<i64>,
    /// Bitmask of special kill circumstances.
    pub death_flags: Option<i64>,
    /// Team index of the killer.
    pub team: Option<i64>,
    /// Killer class code resolved to a name.
    pub killer_class_name: Option<&'static str>,
    /// Victim class code resolved to a name.
    pub victim_class_name: Option<&'static str>,
    /// Special weapon code resolved to a name (sentry kills only).
    pub killer_weapon_name: Option<&'static str>,
    /// Custom kill code resolved to a name.
    pub customkill_name: Option<&'static str>,
    /// Names of the bits set in `death_flags`; `Some` exactly when the
    /// `death_flags` column was part of the response.
    pub death_flag_names: Option<Vec<&'static str>>,
    /// Map metadata blob from the same response, shared by every record of
    /// the batch.
    pub map_data: Arc<Value>,
    /// Columns the server sent that this client does not model.
    pub extra: BTreeMap<String, Value>,
}

impl KillRecord {
    /// The kill `timestamp` as a UTC datetime, when that column is present
    /// and within the representable range.
    pub fn kill_time(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_time_converts_unix_timestamp() {
        let record = KillRecord {
            timestamp: Some(1357677600),
            ..Default::default()
        };
        let time = record.kill_time().unwrap();
        assert_eq!(time.to_rfc3339(), "2013-01-08T20:40:00+00:00");
    }

    #[test]
    fn kill_time_is_none_without_timestamp() {
        assert!(KillRecord::default().kill_time().is_none());
    }

    #[test]
    fn map_statistic_keeps_unmodeled_keys() {
        let stat: MapStatistic = serde_json::from_value(serde_json::json!({
            "name": "ctf_2fort",
            "kill_count": 561928,
            "last_seen": 1357677600
        }))
        .unwrap();
        assert_eq!(stat.name, "ctf_2fort");
        assert_eq!(stat.kill_count, 561928);
        assert_eq!(stat.extra["last_seen"], serde_json::json!(1357677600));
    }
}
