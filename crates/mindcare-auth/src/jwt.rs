use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

const ISSUER: &str = "mindcare";

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id, stringified UUID.
    pub sub: String,
    pub email: String,
    pub iss: String,
    pub iat: u64,
    pub exp: u64,
}

impl SessionClaims {
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Issue a session token for an authenticated user.
pub fn issue_token(
    secret: &[u8],
    user_id: Uuid,
    email: &str,
    ttl_seconds: u64,
) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second() as u64;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iss: ISSUER.to_string(),
        iat: now,
        exp: now + ttl_seconds,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(token)
}

/// Validate a session token and return its claims.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

    Ok(token_data.claims)
}
