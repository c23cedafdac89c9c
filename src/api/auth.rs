use axum::{Json, extract::rejection::JsonRejection};
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::generator;
use crate::models::{LoginRequest, LoginResponse};

/// Demo login: any non-empty username/password pair is accepted and gets a
/// fresh opaque token. Nothing is verified or stored.
pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload.inspect_err(|e| warn!(error = %e, "Rejected login body"))?;

    info!(
        username = payload.username.as_deref().unwrap_or_default(),
        "Login attempt"
    );

    let credentials = payload
        .validate()
        .inspect_err(|_| warn!("Login rejected: missing credentials"))?;

    let token = generator::token(&mut rand::rng());

    Ok(Json(LoginResponse::success(token, credentials.username)))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use tower::util::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new().route("/api/login", post(login))
    }

    async fn post_login(body: &str) -> (StatusCode, LoginResponse) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_login_success() {
        let (status, body) = post_login(r#"{"username":"alice","password":"x"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.message, "Login successful");
        assert_eq!(body.username.as_deref(), Some("alice"));

        let token = body.token.unwrap();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_login_any_password_accepted() {
        for (user, pass) in [("bob", "hunter2"), ("ünïcode", "🔑"), ("a", "b")] {
            let body = serde_json::json!({ "username": user, "password": pass }).to_string();
            let (status, response) = post_login(&body).await;

            assert_eq!(status, StatusCode::OK);
            assert!(response.success);
            assert_eq!(response.username.as_deref(), Some(user));
        }
    }

    #[tokio::test]
    async fn test_login_empty_username() {
        let (status, body) = post_login(r#"{"username":"","password":"x"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.message, "Username and password are required");
        assert!(body.token.is_none());
        assert!(body.username.is_none());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        for payload in [r#"{"username":"alice"}"#, r#"{"password":"x"}"#, "{}"] {
            let (status, body) = post_login(payload).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(!body.success);
            assert!(body.token.is_none());
        }
    }

    #[tokio::test]
    async fn test_login_malformed_body() {
        let (status, body) = post_login("not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert!(!body.message.is_empty());
    }

    #[tokio::test]
    async fn test_login_tokens_not_reused() {
        let payload = r#"{"username":"alice","password":"x"}"#;
        let (_, first) = post_login(payload).await;
        let (_, second) = post_login(payload).await;

        assert_ne!(first.token, second.token);
    }
}
