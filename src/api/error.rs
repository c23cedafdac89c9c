use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::LoginResponse;

/// Client errors raised by API handlers.
///
/// Both render as a failed `LoginResponse`, the only error body this API has.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCredentials | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(LoginResponse::failure(self.to_string()))).into_response()
    }
}
