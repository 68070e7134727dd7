//! mindcare-auth
//!
//! Credential hashing and session tokens. Passwords are stored only as
//! salted argon2id hashes; sessions are HS256 JWTs signed with a
//! server-side secret.

pub mod error;
pub mod jwt;
pub mod password;
