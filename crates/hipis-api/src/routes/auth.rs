use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hipis_auth::password;
use hipis_auth::token::AuthIdentity;
use hipis_core::doc_keys;
use hipis_core::envelope::Envelope;
use hipis_core::models::user::{EmailIndex, Role, User, UserProfile};
use hipis_storage::docs;
use hipis_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub university: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Profile plus a fresh token, returned by both signup and login.
#[derive(Serialize)]
pub struct AuthData {
    pub user: UserProfile,
    pub token: String,
}

fn validate_signup(payload: &SignupPayload) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(ApiError::BadRequest(
            "email must be a valid address".to_string(),
        ));
    }
    if payload.password.chars().count() < 8 {
        return Err(ApiError::BadRequest(
            "password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<(StatusCode, Json<Envelope<AuthData>>), ApiError> {
    validate_signup(&payload)?;

    let email = payload.email.trim().to_lowercase();
    let email_key = doc_keys::user_email(&email);

    match docs::load::<EmailIndex>(&state.s3, &state.bucket, &email_key).await {
        Ok(_) => {
            return Err(ApiError::BadRequest("Email already registered".to_string()));
        }
        Err(StorageError::NotFound { .. }) => {}
        Err(err) => return Err(err.into()),
    }

    let now = jiff::Timestamp::now();
    let user = User {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        email,
        password_hash: password::hash_password(&payload.password)?,
        role: payload.role.unwrap_or(Role::Student),
        university: payload.university.unwrap_or_default(),
        active: true,
        assigned_counsellor: None,
        created_at: now,
        updated_at: now,
    };

    docs::save(&state.s3, &state.bucket, &doc_keys::user(user.id), &user).await?;
    docs::save(
        &state.s3,
        &state.bucket,
        &email_key,
        &EmailIndex { user_id: user.id },
    )
    .await?;

    let identity = AuthIdentity {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role,
    };
    let token = state.tokens.issue(&identity)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with(
            AuthData {
                user: user.profile(),
                token,
            },
            "User registered successfully",
        )),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Envelope<AuthData>>, ApiError> {
    let email_key = doc_keys::user_email(&payload.email);

    let index = match docs::load::<EmailIndex>(&state.s3, &state.bucket, &email_key).await {
        Ok((index, _)) => index,
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::Unauthenticated(
                "Invalid email or password".to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    let (user, _) =
        docs::load::<User>(&state.s3, &state.bucket, &doc_keys::user(index.user_id)).await?;

    if !user.active {
        return Err(ApiError::Forbidden(
            "Account is deactivated. Contact admin.".to_string(),
        ));
    }

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(ApiError::Unauthenticated(
            "Invalid email or password".to_string(),
        ));
    }

    let identity = AuthIdentity {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role,
    };
    let token = state.tokens.issue(&identity)?;

    Ok(Json(Envelope::ok_with(
        AuthData {
            user: user.profile(),
            token,
        },
        "Login successful",
    )))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthIdentity>,
) -> Result<Json<Envelope<UserProfile>>, ApiError> {
    let (user, _) = docs::load::<User>(
        &state.s3,
        &state.bucket,
        &doc_keys::user(identity.user_id),
    )
    .await?;

    Ok(Json(Envelope::ok(user.profile())))
}
