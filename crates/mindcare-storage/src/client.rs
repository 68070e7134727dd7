use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::Client;

/// Load shared AWS config from the default credential chain. The same config
/// is reused for every AWS client the service builds.
pub async fn load_aws_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Build an S3 client from shared config.
pub fn build_client(config: &SdkConfig) -> Client {
    Client::new(config)
}
