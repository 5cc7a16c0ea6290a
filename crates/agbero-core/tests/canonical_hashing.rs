//! Hash prefixes depend only on logical content, never on construction order.

use agbero_core::record::data_from_value;
use agbero_core::{ActivityData, ActivityRecord, Memo};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn record(data: ActivityData) -> ActivityRecord {
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    ActivityRecord::new("bond_created", data, at, 7)
}

#[test]
fn same_content_in_any_key_order_hashes_identically() {
    let mut forward = ActivityData::new();
    forward.insert("bond_id".into(), json!("B1"));
    forward.insert("principal".into(), json!("100"));
    forward.insert("collateral_sol".into(), json!(1.5));
    forward.insert("meta".into(), json!({"a": 1, "b": [1, 2, {"y": 0, "x": 0}]}));

    let mut backward = ActivityData::new();
    backward.insert("meta".into(), json!({"b": [1, 2, {"x": 0, "y": 0}], "a": 1}));
    backward.insert("collateral_sol".into(), json!(1.5));
    backward.insert("principal".into(), json!("100"));
    backward.insert("bond_id".into(), json!("B1"));

    let first = record(forward);
    let second = record(backward);
    assert_eq!(first.canonical_json(), second.canonical_json());
    assert_eq!(first.hash_prefix(), second.hash_prefix());
}

#[test]
fn hashing_twice_is_stable() {
    let record = record(data_from_value(json!({"bond_id": "B1"})).unwrap());
    assert_eq!(record.hash_prefix(), record.hash_prefix());
}

#[test]
fn record_survives_json_export_and_still_matches_its_memo() {
    let original = record(
        data_from_value(json!({"bond_id": "B1", "principal": "100", "collateral_sol": 1.5}))
            .unwrap(),
    );
    let memo: Memo = original.memo().to_string().parse().unwrap();

    let exported = serde_json::to_string_pretty(&original).unwrap();
    let reloaded = ActivityRecord::from_json(&exported).unwrap();

    assert_eq!(reloaded, original);
    assert!(reloaded.matches(&memo));
}

#[test]
fn memo_shape_for_bond_created() {
    let record = record(
        data_from_value(json!({"bond_id": "B1", "principal": "100", "collateral_sol": 1.5}))
            .unwrap(),
    );
    let text = record.memo().to_string();
    let parts: Vec<&str> = text.splitn(4, ':').collect();

    assert_eq!(parts[0], "AGBERO");
    assert_eq!(parts[1], "bond_created");
    assert_eq!(parts[2].len(), 16);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(parts[3], "2026-10-16T09:30:00");
    assert!(chrono::NaiveDateTime::parse_from_str(parts[3], "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    assert!(matches!(serde_json::to_value(&record).unwrap(), Value::Object(_)));
}
