use std::sync::Arc;

use aws_config::SdkConfig;
use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub aws_config: Arc<SdkConfig>,
    pub bucket: String,
    pub jwt_secret: Arc<Vec<u8>>,
    pub token_ttl_seconds: u64,
    pub model_id: String,
}
