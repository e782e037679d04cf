use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hipis_core::models::user::Role;

use crate::error::AuthError;

/// Issuer claim embedded in every token; tokens from unrelated services fail
/// validation here even with a shared secret.
pub const ISSUER: &str = "hipis";
pub const AUDIENCE: &str = "hipis-app";

/// Fixed lifetime from issuance. There is no refresh flow and no revocation;
/// re-authentication is required after expiry.
pub const TOKEN_TTL_SECS: u64 = 3600;

/// The verified identity attached to a request by the auth middleware.
/// Constructed once from the token claims and passed along; handlers never
/// re-derive it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    email: String,
    role: Role,
    iss: String,
    aud: String,
    iat: u64,
    exp: u64,
}

/// Issues and verifies signed identity tokens. Built once at startup; the
/// process refuses to start without a signing secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Read the signing secret from `JWT_SECRET`. An absent or empty secret
    /// is an error the caller must treat as fatal.
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| AuthError::MissingSecret)?;
        if secret.trim().is_empty() {
            return Err(AuthError::MissingSecret);
        }
        Ok(Self::new(secret.as_bytes()))
    }

    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);
        validation.validate_exp = true;
        // Expiry is monotonic to the second; the default 60 s leeway would
        // accept tokens past their lifetime.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for a verified identity, expiring [`TOKEN_TTL_SECS`]
    /// from now.
    pub fn issue(&self, identity: &AuthIdentity) -> Result<String, AuthError> {
        self.issue_at(identity, jsonwebtoken::get_current_timestamp())
    }

    /// Issue with an explicit issuance instant (epoch seconds). Split out so
    /// expiry behavior is testable without a clock mock.
    pub fn issue_at(&self, identity: &AuthIdentity, issued_at: u64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: identity.user_id,
            email: identity.email.clone(),
            role: identity.role,
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Validate signature, expiry, issuer, and audience together. Any single
    /// mismatch yields `None`; callers respond with a uniform authentication
    /// failure and never see the underlying error.
    pub fn verify(&self, token: &str) -> Option<AuthIdentity> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Some(AuthIdentity {
                user_id: data.claims.sub,
                email: data.claims.email,
                role: data.claims.role,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "token rejected");
                None
            }
        }
    }
}
