use axum::{Json, extract::Query};
use serde::Deserialize;
use tracing::info;

use crate::generator;
use crate::models::UserInfo;

pub const DEFAULT_USERNAME: &str = "user";

#[derive(Debug, Deserialize)]
pub struct UserInfoQuery {
    pub username: Option<String>,
}

/// Fake profile for the requested username. An absent or empty
/// `username` falls back to [`DEFAULT_USERNAME`].
pub async fn user_infos(Query(query): Query<UserInfoQuery>) -> Json<UserInfo> {
    let username = query
        .username
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    info!(username = %username, "Fetching user info");

    Json(generator::user_info(&mut rand::rng(), &username))
}
