use super::*;
use serde_json::json;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_user_name_is_sentinel() {
    let user = LoginUser::default();
    assert_eq!(user.user_name, NOT_LOGGED_IN);
}

#[test]
fn default_user_account_is_sentinel() {
    let user = LoginUser::default();
    assert_eq!(user.user_account, NOT_LOGGED_IN);
}

#[test]
fn default_has_no_role() {
    let user = LoginUser::default();
    assert!(user.user_role.is_none());
}

#[test]
fn default_has_no_extra_fields() {
    let user = LoginUser::default();
    assert!(user.extra.is_empty());
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn merge_overwrites_present_fields() {
    let mut user = LoginUser::default();
    user.merge(LoginUserPatch {
        user_name: Some("Alice".to_owned()),
        user_account: Some("a1".to_owned()),
        ..LoginUserPatch::default()
    });
    assert_eq!(user.user_name, "Alice");
    assert_eq!(user.user_account, "a1");
}

#[test]
fn merge_leaves_absent_fields_untouched() {
    let mut user = LoginUser::default();
    user.merge(LoginUserPatch {
        user_name: Some("Alice".to_owned()),
        user_account: Some("a1".to_owned()),
        user_role: Some(AccessRole::User),
        ..LoginUserPatch::default()
    });

    user.merge(LoginUserPatch {
        user_name: Some("Alice2".to_owned()),
        ..LoginUserPatch::default()
    });

    assert_eq!(user.user_name, "Alice2");
    assert_eq!(user.user_account, "a1");
    assert_eq!(user.user_role, Some(AccessRole::User));
}

#[test]
fn merge_preserves_existing_extra_fields() {
    let mut user = LoginUser::default();
    user.extra.insert("avatarUrl".to_owned(), json!("http://x/a.png"));

    user.merge(LoginUserPatch {
        user_name: Some("Alice".to_owned()),
        ..LoginUserPatch::default()
    });

    assert_eq!(user.extra.get("avatarUrl"), Some(&json!("http://x/a.png")));
}

#[test]
fn merge_inserts_new_extra_keys() {
    let mut user = LoginUser::default();
    let mut patch = LoginUserPatch::default();
    patch.extra.insert("profile".to_owned(), json!("hello"));

    user.merge(patch);

    assert_eq!(user.extra.get("profile"), Some(&json!("hello")));
}

#[test]
fn merge_overwrites_colliding_extra_keys() {
    let mut user = LoginUser::default();
    user.extra.insert("profile".to_owned(), json!("old"));

    let mut patch = LoginUserPatch::default();
    patch.extra.insert("profile".to_owned(), json!("new"));
    user.merge(patch);

    assert_eq!(user.extra.get("profile"), Some(&json!("new")));
}

#[test]
fn merge_empty_patch_is_a_no_op() {
    let mut user = LoginUser::default();
    user.merge(LoginUserPatch {
        user_name: Some("Alice".to_owned()),
        user_role: Some(AccessRole::Admin),
        ..LoginUserPatch::default()
    });
    let before = user.clone();

    user.merge(LoginUserPatch::default());

    assert_eq!(user, before);
}

#[test]
fn merge_same_patch_twice_matches_merging_once() {
    let mut patch = LoginUserPatch {
        user_name: Some("Bob".to_owned()),
        user_role: Some(AccessRole::User),
        ..LoginUserPatch::default()
    };
    patch.extra.insert("score".to_owned(), json!(42));

    let mut once = LoginUser::default();
    once.merge(patch.clone());

    let mut twice = LoginUser::default();
    twice.merge(patch.clone());
    twice.merge(patch);

    assert_eq!(once, twice);
}

// =============================================================================
// logged_out patch
// =============================================================================

#[test]
fn logged_out_resets_identity_and_role_together() {
    let patch = LoginUserPatch::logged_out();
    assert_eq!(patch.user_name.as_deref(), Some(NOT_LOGGED_IN));
    assert_eq!(patch.user_account.as_deref(), Some(NOT_LOGGED_IN));
    assert_eq!(patch.user_role, Some(AccessRole::NotLogin));
}

#[test]
fn logged_out_carries_no_extra_fields() {
    let patch = LoginUserPatch::logged_out();
    assert!(patch.extra.is_empty());
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn patch_deserializes_from_empty_object() {
    let patch: LoginUserPatch = serde_json::from_str("{}").unwrap();
    assert_eq!(patch, LoginUserPatch::default());
}

#[test]
fn patch_deserializes_camel_case_fields() {
    let patch: LoginUserPatch =
        serde_json::from_value(json!({"userName": "Alice", "userAccount": "a1", "userRole": "admin"})).unwrap();
    assert_eq!(patch.user_name.as_deref(), Some("Alice"));
    assert_eq!(patch.user_account.as_deref(), Some("a1"));
    assert_eq!(patch.user_role, Some(AccessRole::Admin));
}

#[test]
fn patch_captures_unmodeled_fields_in_extra() {
    let patch: LoginUserPatch =
        serde_json::from_value(json!({"userName": "Alice", "avatarUrl": "http://x/a.png"})).unwrap();
    assert_eq!(patch.extra.get("avatarUrl"), Some(&json!("http://x/a.png")));
}

#[test]
fn user_serializes_without_role_when_unset() {
    let user = LoginUser::default();
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("userRole").is_none());
}

#[test]
fn role_wire_spellings() {
    assert_eq!(serde_json::to_value(AccessRole::NotLogin).unwrap(), json!("notLogin"));
    assert_eq!(serde_json::to_value(AccessRole::User).unwrap(), json!("user"));
    assert_eq!(serde_json::to_value(AccessRole::Admin).unwrap(), json!("admin"));
}
