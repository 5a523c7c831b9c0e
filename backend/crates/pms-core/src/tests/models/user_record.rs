use crate::{RawPropertyId, UserRecord};

use serde_json::json;

#[test]
fn given_camel_case_json_when_deserialized_then_fields_populated() {
    let record: UserRecord = serde_json::from_value(json!({
        "id": "u-1",
        "role": "manager",
        "assignedPropertyIds": ["1", 2, null],
        "verificationStatus": "verified"
    }))
    .unwrap();

    assert_eq!(record.id, "u-1");
    assert_eq!(record.role, "manager");
    assert_eq!(record.verification_status, "verified");
    let raw = record.assigned_property_ids.unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[1], RawPropertyId::Integer(2));
}

#[test]
fn given_null_or_missing_assignments_when_deserialized_then_none() {
    let explicit_null: UserRecord = serde_json::from_value(json!({
        "id": "u-2",
        "role": "staff",
        "assignedPropertyIds": null,
        "verificationStatus": "pending"
    }))
    .unwrap();
    let missing: UserRecord = serde_json::from_value(json!({
        "id": "u-3",
        "role": "staff"
    }))
    .unwrap();

    assert!(explicit_null.assigned_property_ids.is_none());
    assert!(missing.assigned_property_ids.is_none());
    assert_eq!(missing.verification_status, "");
}

#[test]
fn test_user_record_builder() {
    let record = UserRecord::new("u-4", "admin", "verified").with_assigned(["8", "x"]);

    assert_eq!(
        record.assigned_property_ids,
        Some(vec![
            RawPropertyId::Text("8".into()),
            RawPropertyId::Text("x".into())
        ])
    );
}
