//! Unit tests for the user entity

use crate::domain::entities::user::{Role, User};

#[test]
fn test_new_user_defaults() {
    let user = User::new("a@b.com", "hash", Role::Customer);

    assert_eq!(user.id, 0);
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert!(!user.is_admin());
    assert!(user.verified().is_verified);
}

#[test]
fn test_role_parsing_and_display() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("Employee".parse::<Role>().unwrap(), Role::Employee);
    assert_eq!(Role::Customer.to_string(), "customer");
    assert!("chef".parse::<Role>().is_err());
}

#[test]
fn test_role_permissions() {
    assert!(Role::Admin.can_view_all_orders());
    assert!(Role::Employee.can_view_all_orders());
    assert!(!Role::Customer.can_view_all_orders());
}

#[test]
fn test_password_hash_is_not_serialized() {
    let user = User::new("a@b.com", "secret-hash", Role::Admin);
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "admin");
}
