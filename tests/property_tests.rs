/// Property-based tests using proptest
/// Tests invariants of filter validation, the lookup tables and enrichment
use heatmaps_tf::enrichment::enrich_kill_response;
use heatmaps_tf::lookups::{self, CLASSES, QUERY_FIELDS, TEAMS};
use heatmaps_tf::{ApiError, KillDataQuery};
use proptest::prelude::*;
use serde_json::{json, Value};

// Property: any combination drawn from the vocabularies validates
proptest! {
    #[test]
    fn vocabulary_subsets_always_validate(
        fields in prop::sample::subsequence(QUERY_FIELDS.to_vec(), 0..=QUERY_FIELDS.len()),
        killer_classes in prop::sample::subsequence(CLASSES.to_vec(), 0..=CLASSES.len()),
        killer_teams in prop::sample::subsequence(TEAMS.to_vec(), 0..=TEAMS.len()),
        victim_classes in prop::sample::subsequence(CLASSES.to_vec(), 0..=CLASSES.len()),
        limit in 0u32..=10_000
    ) {
        let query = KillDataQuery {
            fields: fields.iter().map(|s| s.to_string()).collect(),
            limit,
            killer_classes: killer_classes.iter().map(|s| s.to_string()).collect(),
            killer_teams: killer_teams.iter().map(|s| s.to_string()).collect(),
            victim_classes: victim_classes.iter().map(|s| s.to_string()).collect(),
        };
        prop_assert!(query.validate().is_ok());
    }

    #[test]
    fn out_of_vocabulary_class_always_rejected(bad in "[a-z]{3,12}") {
        prop_assume!(!CLASSES.contains(&bad.as_str()));
        let query = KillDataQuery {
            killer_classes: vec![bad.clone()],
            ..Default::default()
        };
        match query.validate() {
            Err(ApiError::InvalidFilter { field, bad_values }) => {
                prop_assert_eq!(field, "killer_classes");
                prop_assert_eq!(bad_values, vec![bad]);
            }
            other => prop_assert!(false, "expected InvalidFilter, got {:?}", other),
        }
    }

    #[test]
    fn out_of_vocabulary_field_always_rejected(bad in "[a-z_]{1,20}") {
        prop_assume!(!QUERY_FIELDS.contains(&bad.as_str()));
        let query = KillDataQuery {
            fields: vec![bad.clone()],
            ..Default::default()
        };
        prop_assert!(query.validate().is_err());
    }
}

// Property: lookup tables cover exactly their documented ranges
proptest! {
    #[test]
    fn class_names_cover_exactly_the_index_range(code in -100i64..100) {
        prop_assert_eq!(lookups::class_name(code).is_some(), (0..=9).contains(&code));
    }

    #[test]
    fn custom_kill_names_cover_exactly_one_to_fifty(code in -100i64..200) {
        prop_assert_eq!(lookups::custom_kill_name(code).is_some(), (1..=50).contains(&code));
    }

    #[test]
    fn death_flag_name_count_matches_low_bit_popcount(mask in 0i64..(1i64 << 12)) {
        let names = lookups::death_flag_names(mask);
        let low_bits = (mask & 0x1FF).count_ones() as usize;
        prop_assert_eq!(names.len(), low_bits);
    }

    #[test]
    fn death_flag_names_never_repeat(mask in 0i64..(1i64 << 9)) {
        let names = lookups::death_flag_names(mask);
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), names.len());
    }
}

// Property: enrichment never panics and accounts for every row
proptest! {
    #[test]
    fn enrichment_accounts_for_every_numeric_row(
        rows in prop::collection::vec(prop::collection::vec(-1000i64..1000, 3), 0..20)
    ) {
        let kills: Vec<Value> = rows.iter().map(|row| json!(row)).collect();
        let raw = json!({
            "map_data": {},
            "fields": ["killer_class", "customkill", "death_flags"],
            "kills": kills
        });
        let records = enrich_kill_response(&raw).unwrap();
        prop_assert_eq!(records.len(), rows.len());
    }

    #[test]
    fn enrichment_tolerates_mistyped_cells(
        id in prop::num::i64::ANY,
        stray in "\\PC{0,20}"
    ) {
        // A non-numeric cell in a numeric column becomes None, never an error.
        let raw = json!({
            "map_data": {},
            "fields": ["id", "killer_class"],
            "kills": [[id, stray]]
        });
        let records = enrich_kill_response(&raw).unwrap();
        prop_assert_eq!(records[0].id, Some(id));
        prop_assert_eq!(records[0].killer_class, None);
        prop_assert_eq!(records[0].killer_class_name, None);
    }

    #[test]
    fn death_flag_list_presence_tracks_the_column(
        include in proptest::bool::ANY,
        mask in 0i64..(1i64 << 9)
    ) {
        let raw = if include {
            json!({ "map_data": {}, "fields": ["id", "death_flags"], "kills": [[1, mask]] })
        } else {
            json!({ "map_data": {}, "fields": ["id"], "kills": [[1]] })
        };
        let records = enrich_kill_response(&raw).unwrap();
        prop_assert_eq!(records[0].death_flag_names.is_some(), include);
    }
}
