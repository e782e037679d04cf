use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT_SECRET is required")]
    MissingSecret,

    #[error("password hash error: {0}")]
    PasswordHash(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
