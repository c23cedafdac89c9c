use axum::Json;
use chrono::Utc;

use crate::models::{HealthStatus, format_instant};

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: format_instant(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[tokio::test]
    async fn test_health_ok() {
        let Json(status) = health().await;

        assert_eq!(status.status, "ok");
        assert!(DateTime::parse_from_rfc3339(&status.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_timestamp_non_decreasing() {
        let mut previous = DateTime::parse_from_rfc3339(&health().await.0.timestamp).unwrap();

        for _ in 0..20 {
            let current = DateTime::parse_from_rfc3339(&health().await.0.timestamp).unwrap();
            assert!(current >= previous);
            previous = current;
        }
    }
}
