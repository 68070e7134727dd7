use mindcare_auth::error::AuthError;
use mindcare_auth::password::{hash_password, verify_password};

#[test]
fn hash_then_verify_succeeds() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(verify_password("correct horse battery staple", &hash).is_ok());
}

#[test]
fn wrong_password_is_rejected() {
    let hash = hash_password("correct horse battery staple").unwrap();
    let err = verify_password("Tr0ub4dor&3", &hash).unwrap_err();
    assert!(matches!(err, AuthError::AuthFailed));
}

#[test]
fn hashes_are_salted() {
    // Same password, two hashes: the random salt must make them differ.
    let a = hash_password("hunter2").unwrap();
    let b = hash_password("hunter2").unwrap();
    assert_ne!(a, b);
}

#[test]
fn hash_never_contains_plaintext() {
    let hash = hash_password("my-secret-password").unwrap();
    assert!(!hash.contains("my-secret-password"));
    assert!(hash.starts_with("$argon2id$"));
}

#[test]
fn malformed_stored_hash_is_not_auth_failure() {
    let err = verify_password("anything", "not-a-phc-string").unwrap_err();
    assert!(matches!(err, AuthError::Hash(_)));
}
