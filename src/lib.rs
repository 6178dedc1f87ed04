//! TravelMate backend: accounts, traveller profiles, and the onboarding
//! flow that fills them in.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod onboarding;
pub mod routes;
pub mod store;

pub use app::{create_app, AppState};
pub use config::Settings;
