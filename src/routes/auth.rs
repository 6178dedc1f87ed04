//! Authentication routes
//!
//! Email/password accounts. Registration creates the user together with an
//! empty profile.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::response::Created;
use crate::app::AppState;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::RequireAuth;
use crate::domain::auth::{normalize_email, AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use crate::error::{ApiError, ApiResult};
use crate::store::StoreError;

/// POST /auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Created<AuthResponse>> {
    let Json(req) = body?;
    let credentials = req.validate().map_err(ApiError::Validation)?;

    let password_hash = hash_password(credentials.password, state.settings.bcrypt_cost).await?;

    let user = state
        .store
        .create_user(&credentials.email, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::conflict("User already exists with this email"),
            other => other.into(),
        })?;

    let token = state.tokens.issue(user.id, &user.email)?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok(Created(AuthResponse {
        message: "User registered successfully".to_string(),
        token,
        user: user.into(),
    }))
}

/// POST /auth/login
///
/// Unknown email and wrong password produce the same response.
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = body?;
    let email = normalize_email(&req.email);

    let Some(user) = state.store.find_by_email(&email).await? else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !verify_password(req.password, user.password_hash.clone()).await? {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(user.id, &user.email)?;
    tracing::debug!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    }))
}

/// GET /auth/me
pub async fn me(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<Json<MeResponse>> {
    let user = state
        .store
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(MeResponse { user: user.into() }))
}
