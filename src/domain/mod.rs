//! Domain types and DTOs
//!
//! These types define the data structures shared by the HTTP layer, the
//! store, and the onboarding flow.

pub mod auth;
pub mod catalog;
pub mod profile;
pub mod validation;

pub use auth::{AuthResponse, MeResponse, UserResponse};
pub use profile::{Profile, ProfileField, ProfileUpdate};
pub use validation::FieldError;
