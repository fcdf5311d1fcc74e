use crate::{Identity, Role};

#[test]
fn test_role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse(" Admin "), Role::Admin);
}

#[test]
fn test_role_parse_defaults_to_user() {
    assert_eq!(Role::parse("user"), Role::User);
    assert_eq!(Role::parse("moderator"), Role::User);
    assert_eq!(Role::parse(""), Role::User);
}

#[test]
fn test_identity_profile_copies_name_and_email() {
    let mut identity = Identity::new("user-1", Role::User);
    identity.name = Some("Ada".to_string());
    identity.email = Some("ada@example.com".to_string());

    let profile = identity.profile();

    assert_eq!(profile.id, "user-1");
    assert_eq!(profile.name.as_deref(), Some("Ada"));
    assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    assert!(!identity.is_admin());
}
