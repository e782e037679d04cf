use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config. Done once at startup; the
/// handle is shared read-only across all requests afterwards.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
