use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use hipis_auth::token::TokenService;

/// Shared application state, injected into all route handlers via Axum state.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub tokens: Arc<TokenService>,
    /// Opt-in demo mode: counsellor and admin reads fall back to canned data
    /// when their collections are empty. Off by default, so an empty result
    /// renders as empty.
    pub demo: bool,
}
