//! mindcare-storage
//!
//! The record store behind the API: JSON records and uploaded photos in S3,
//! addressed by the key conventions in `mindcare_core::keys`. Thin wrapper
//! around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
