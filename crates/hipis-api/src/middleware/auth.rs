use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use hipis_auth::token::AuthIdentity;
use hipis_core::models::user::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Gate 1: identity.
///
/// Requires an `Authorization: Bearer <token>` header and a token that
/// verifies (signature, expiry, issuer, audience). On success, inserts the
/// typed [`AuthIdentity`] into request extensions; handlers read it from
/// there and never re-derive it.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthenticated("Authentication required".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthenticated("Authentication required".to_string()))?;

        state
            .tokens
            .verify(token)
            .ok_or_else(|| ApiError::Unauthenticated("Invalid or expired token".to_string()))?
    };

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Gate 2: role restriction for the `/api/admin` route group. Runs after
/// Gate 1; any role other than admin is rejected.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let is_admin = req
        .extensions()
        .get::<AuthIdentity>()
        .is_some_and(|identity| identity.role == Role::Admin);

    if !is_admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(req).await)
}
