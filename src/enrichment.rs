//! Turns the raw kills response into named, enriched records.
//!
//! The kills endpoint answers with a column-oriented payload: a `fields`
//! list naming the columns and a `kills` list of positional rows. This
//! module zips the two back together into typed [`KillRecord`]s, attaches
//! the shared `map_data` blob to every record and resolves numeric codes
//! to human-readable names.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::ApiError;
use crate::lookups;
use crate::models::KillRecord;

/// Builds one enriched [`KillRecord`] per row of a raw kills response.
///
/// Pure function; raw-mode output can be fed through it unchanged. Fails
/// with [`ApiError::MalformedResponse`] when the payload is missing one of
/// its three sections or a row does not line up with the field list.
/// Numeric codes without a table entry are not errors and resolve to
/// `None`.
pub fn enrich_kill_response(raw: &Value) -> Result<Vec<KillRecord>, ApiError> {
    let map_data = raw.get("map_data").ok_or_else(|| {
        ApiError::MalformedResponse("response has no 'map_data' section".to_string())
    })?;
    let field_names: Vec<&str> = raw
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::MalformedResponse("response has no 'fields' list".to_string()))?
        .iter()
        .map(|name| {
            name.as_str().ok_or_else(|| {
                ApiError::MalformedResponse("'fields' contains a non-string entry".to_string())
            })
        })
        .collect::<Result<_, _>>()?;
    let kills = raw
        .get("kills")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::MalformedResponse("response has no 'kills' list".to_string()))?;

    let map_data = Arc::new(map_data.clone());
    let mut records = Vec::with_capacity(kills.len());
    for (row, kill) in kills.iter().enumerate() {
        let values = kill
            .as_array()
            .ok_or_else(|| ApiError::MalformedResponse(format!("kill row {} is not a list", row)))?;
        if values.len() != field_names.len() {
            return Err(ApiError::MalformedResponse(format!(
                "kill row {} has {} values for {} fields",
                row,
                values.len(),
                field_names.len()
            )));
        }
        records.push(build_record(&field_names, values, Arc::clone(&map_data)));
    }
    Ok(records)
}

/// Zips one positional row against the field names, then derives the
/// name fields for whichever code columns are present.
fn build_record(field_names: &[&str], values: &[Value], map_data: Arc<Value>) -> KillRecord {
    let mut record = KillRecord {
        map_data,
        ..Default::default()
    };

    for (name, value) in field_names.iter().zip(values) {
        match *name {
            "id" => record.id = value.as_i64(),
            "timestamp" => record.timestamp = value.as_i64(),
            "killer_class" => record.killer_class = value.as_i64(),
            "killer_weapon" => record.killer_weapon = value.as_i64(),
            "killer_x" => record.killer_x = value.as_f64(),
            "killer_y" => record.killer_y = value.as_f64(),
            "killer_z" => record.killer_z = value.as_f64(),
            "victim_class" => record.victim_class = value.as_i64(),
            "victim_x" => record.victim_x = value.as_f64(),
            "victim_y" => record.victim_y = value.as_f64(),
            "victim_z" => record.victim_z = value.as_f64(),
            "customkill" => record.customkill = value.as_i64(),
            "damagebits" => record.damagebits = value.as_i64(),
            "death_flags" => record.death_flags = value.as_i64(),
            "team" => record.team = value.as_i64(),
            other => {
                record.extra.insert(other.to_string(), value.clone());
            }
        }
    }

    record.killer_class_name = record.killer_class.and_then(lookups::class_name);
    record.victim_class_name = record.victim_class.and_then(lookups::class_name);
    record.killer_weapon_name = record.killer_weapon.and_then(lookups::special_weapon_name);
    record.customkill_name = record.customkill.and_then(lookups::custom_kill_name);
    if field_names.contains(&"death_flags") {
        record.death_flag_names = Some(lookups::death_flag_names(record.death_flags.unwrap_or(0)));
    }

    record
}
