use crate::{AssignedPropertyIds, RawPropertyId};

use serde_json::json;

fn parse(value: serde_json::Value) -> Vec<RawPropertyId> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_mixed_legacy_list_when_parsed_then_only_valid_ids_kept() {
    // Given
    let raw = parse(json!(["3", "7", "abc", null, 4]));

    // When
    let ids = AssignedPropertyIds::from_raw(&raw);

    // Then
    assert_eq!(ids, AssignedPropertyIds::from([3, 4, 7]));
}

#[test]
fn given_duplicates_in_both_forms_when_parsed_then_deduplicated() {
    let raw = parse(json!([5, "5", " 5 ", 5.0]));

    let ids = AssignedPropertyIds::from_raw(&raw);

    assert_eq!(ids.len(), 1);
    assert!(ids.contains(5));
}

#[test]
fn given_non_integral_and_exotic_values_when_parsed_then_dropped() {
    let raw = parse(json!([1.5, true, {"id": 2}, [3], "", "12abc", 18446744073709551615u64]));

    let ids = AssignedPropertyIds::from_raw(&raw);

    assert!(ids.is_empty());
}

#[test]
fn given_negative_ids_when_parsed_then_kept() {
    let raw = parse(json!([-4, "-9"]));

    let ids = AssignedPropertyIds::from_raw(&raw);

    assert_eq!(ids.iter().collect::<Vec<_>>(), vec![-9, -4]);
}

#[test]
fn test_raw_property_id_deserializes_every_json_shape() {
    assert_eq!(parse(json!([7]))[0], RawPropertyId::Integer(7));
    assert_eq!(parse(json!(["7"]))[0], RawPropertyId::Text("7".into()));
    assert_eq!(parse(json!([7.0]))[0], RawPropertyId::Float(7.0));
    assert_eq!(
        parse(json!([null]))[0],
        RawPropertyId::Other(serde_json::Value::Null)
    );
}

#[test]
fn test_assigned_property_ids_serializes_as_sorted_list() {
    let ids: AssignedPropertyIds = [9, 2, 5].into_iter().collect();

    assert_eq!(serde_json::to_value(&ids).unwrap(), json!([2, 5, 9]));
}
