pub mod auth;
pub mod health;
pub mod profile;

use axum::{routing::get, routing::post, routing::put, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/profile/options", get(profile::get_profile_options))
        // Protected routes
        .route("/auth/me", get(auth::me))
        .route("/profile", get(profile::get_profile))
        .route("/profile/update", put(profile::update_profile))
}
