use uuid::Uuid;

use mindcare_auth::error::AuthError;
use mindcare_auth::jwt::{issue_token, validate_token};

const SECRET: &[u8] = b"test-secret-do-not-use-in-prod";

#[test]
fn issued_token_round_trips() {
    let user_id = Uuid::new_v4();
    let token = issue_token(SECRET, user_id, "asha@example.com", 3600).unwrap();

    let claims = validate_token(&token, SECRET).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.email, "asha@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token(SECRET, Uuid::new_v4(), "asha@example.com", 3600).unwrap();
    let err = validate_token(&token, b"a-different-secret").unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[test]
fn tampered_token_is_rejected() {
    let token = issue_token(SECRET, Uuid::new_v4(), "asha@example.com", 3600).unwrap();
    let mut tampered = token.into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    assert!(validate_token(&tampered, SECRET).is_err());
}

#[test]
fn garbage_token_is_invalid() {
    let err = validate_token("not.a.jwt", SECRET).unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}
