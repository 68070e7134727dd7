//! mindcare-core
//!
//! Pure domain types and S3 key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the MindCare system.

pub mod keys;
pub mod models;
