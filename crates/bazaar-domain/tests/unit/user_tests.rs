//! Unit tests for the user entity

use bazaar_domain::{Role, User, UserUpdate};
use chrono::Utc;

fn user(role: Option<Role>) -> User {
    User {
        id: 1,
        email: "bo@example.com".to_string(),
        password_hash: Some("$2b$04$abc".to_string()),
        role,
        is_active: true,
        first_name: Some("Bo".to_string()),
        last_name: Some("Lind".to_string()),
        image_url: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_missing_role_is_least_privileged() {
    assert_eq!(user(None).effective_role(), Role::User);
    assert_eq!(user(Some(Role::Admin)).effective_role(), Role::Admin);
}

#[test]
fn test_profile_never_carries_hash() {
    let profile = user(Some(Role::Customer)).profile();
    let json = serde_json::to_string(&profile).expect("serialize");

    assert!(!json.contains("password"));
    assert!(!json.contains("$2b$"));
    assert!(json.contains("\"firstName\":\"Bo\""));
}

#[test]
fn test_seed_record_defaults() {
    let json = r#"{"id": 3, "email": "cy@example.com"}"#;
    let user: User = serde_json::from_str(json).expect("deserialize");

    assert!(user.is_active);
    assert!(user.password_hash.is_none());
    assert_eq!(user.effective_role(), Role::User);
}

#[test]
fn test_empty_update() {
    assert!(UserUpdate::default().is_empty());
    let update = UserUpdate {
        is_active: Some(false),
        ..UserUpdate::default()
    };
    assert!(!update.is_empty());
}
