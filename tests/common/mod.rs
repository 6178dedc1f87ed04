#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use travelmate_backend::{
    auth::TokenIssuer,
    create_app,
    store::{MemoryUserRepository, UserRepository},
    AppState, Settings,
};

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: MemoryUserRepository,
    pub tokens: TokenIssuer,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryUserRepository::new();
        let tokens = TokenIssuer::new(TEST_SECRET, 3600);
        let settings = Settings {
            bcrypt_cost: 4,
            ..Settings::default()
        };
        let shared: Arc<dyn UserRepository> = Arc::new(store.clone());
        let state = AppState::new(shared, settings, tokens.clone());

        Self {
            router: create_app(state),
            store,
            tokens,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json response")
        };

        (status, json)
    }

    /// Register an account and return its bearer token.
    pub async fn register(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/auth/register",
                None,
                Some(serde_json::json!({ "email": email, "password": "secret123" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }
}

pub fn complete_profile_body() -> Value {
    serde_json::json!({
        "fullName": "Ada Lovelace",
        "phone": "+44 20 7946 0000",
        "dateOfBirth": "10/12/1815",
        "nationality": "United Kingdom",
        "travelInterests": ["cultural", "photography"],
        "dietaryRestrictions": ["vegetarian"],
        "accommodationPreference": "boutique",
        "budgetRange": "mid-range",
        "visaStatus": "no-visa",
        "emergencyContact": "Mary Somerville"
    })
}
