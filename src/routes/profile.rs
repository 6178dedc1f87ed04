//! Profile routes
//!
//! Reading and partially updating the caller's traveller profile.

use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::catalog::ProfileOptions;
use crate::domain::profile::{ProfileEnvelope, ProfileUpdate, ProfileUpdatedResponse};
use crate::error::{ApiError, ApiResult};

/// GET /profile
///
/// Return the caller's stored profile verbatim.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<Json<ProfileEnvelope>> {
    let user = state
        .store
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileEnvelope {
        profile: user.profile,
    }))
}

/// PUT /profile/update
///
/// Merge the present fields into the stored profile and re-derive
/// `profileCompleted` from the merged document. The body is validated
/// before anything is loaded or written. An empty body is an empty update.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    body: Bytes,
) -> ApiResult<Json<ProfileUpdatedResponse>> {
    let body = parse_body(&body)?;
    let update = ProfileUpdate::from_json(&body).map_err(ApiError::Validation)?;

    let change = state
        .store
        .update_profile(auth.user_id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    let user = change.user;

    tracing::debug!(
        user_id = %user.id,
        fields = ?update.present_fields(),
        "Profile updated"
    );
    if change.was_completed != user.profile.profile_completed {
        tracing::info!(
            user_id = %user.id,
            profile_completed = user.profile.profile_completed,
            "Profile completion changed"
        );
    }

    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated successfully".to_string(),
        user: user.into(),
    }))
}

fn parse_body(bytes: &[u8]) -> ApiResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))
}

/// GET /profile/options
///
/// Catalogs the onboarding wizard offers, plus the required-field list.
pub async fn get_profile_options() -> Json<ProfileOptions> {
    Json(ProfileOptions::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_an_empty_update() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b" \n").unwrap(), json!({}));
    }

    #[test]
    fn malformed_body_is_a_bad_request() {
        let err = parse_body(b"{\"phone\":").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn parses_json_objects() {
        assert_eq!(
            parse_body(br#"{"phone":"555"}"#).unwrap(),
            json!({ "phone": "555" })
        );
    }
}
