use uuid::Uuid;

use mindcare_core::keys;

#[test]
fn user_key_is_scoped_by_id() {
    let id = Uuid::nil();
    assert_eq!(
        keys::user(id),
        "users/00000000-0000-0000-0000-000000000000.json"
    );
}

#[test]
fn email_index_normalizes_case_and_whitespace() {
    assert_eq!(
        keys::email_index("  Asha@Example.COM "),
        keys::email_index("asha@example.com"),
    );
}

#[test]
fn photo_key_lives_under_user_prefix() {
    let id = Uuid::new_v4();
    let key = keys::photo(id, "avatar.png");
    assert!(key.starts_with(&keys::photos_prefix(id)));
    assert!(key.ends_with("avatar.png"));
}
