use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::SuperAdmin.as_str(), "super-admin");
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Manager.as_str(), "manager");
    assert_eq!(Role::Staff.as_str(), "staff");
    assert_eq!(Role::Receptionist.as_str(), "receptionist");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("super-admin").unwrap(), Role::SuperAdmin);
    assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
    assert!(Role::from_str("janitor").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn given_underscore_spelling_when_parsed_leniently_then_maps_to_super_admin() {
    assert_eq!(Role::parse_lenient("super_admin"), Role::SuperAdmin);
    assert_eq!(Role::parse_lenient("  super-admin "), Role::SuperAdmin);
}

#[test]
fn given_non_canonical_spelling_when_parsed_strictly_then_rejected() {
    assert!(Role::from_str("super_admin").is_err());
    assert!(Role::from_str(" manager").is_err());
    assert!(Role::from_str("Manager").is_err());
}

#[test]
fn given_other_privileged_lookalikes_when_parsed_leniently_then_no_unlimited_scope() {
    for tag in ["SUPER ADMIN", "superadmin", "Super_Admin", "Super-Admin", "super admin"] {
        let role = Role::parse_lenient(tag);
        assert_eq!(role, Role::Unrecognized(tag.to_string()), "tag {tag:?}");
        assert!(!role.has_unlimited_scope(), "tag {tag:?} must be scoped");
    }
}

#[test]
fn given_wrong_case_when_parsed_leniently_then_unrecognized() {
    assert_eq!(
        Role::parse_lenient("MANAGER"),
        Role::Unrecognized("MANAGER".to_string())
    );
}

#[test]
fn given_unknown_tag_when_parsed_leniently_then_unrecognized_without_capabilities() {
    let role = Role::parse_lenient("night-auditor");

    assert_eq!(role, Role::Unrecognized("night-auditor".to_string()));
    assert_eq!(role.as_str(), "night-auditor");
    assert!(!role.has_unlimited_scope());
}

#[test]
fn test_only_super_admin_has_unlimited_scope() {
    assert!(Role::SuperAdmin.has_unlimited_scope());
    assert!(!Role::Admin.has_unlimited_scope());
    assert!(!Role::Manager.has_unlimited_scope());
    assert!(!Role::Staff.has_unlimited_scope());
    assert!(!Role::Receptionist.has_unlimited_scope());
}

#[test]
fn given_legacy_tag_when_round_tripped_through_json_then_canonical_tag_emitted() {
    let role: Role = serde_json::from_str("\"super_admin\"").unwrap();

    assert_eq!(role, Role::SuperAdmin);
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"super-admin\"");
}
