// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Health probe endpoint
use actix_web::get;
use actix_web::web::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness report of the running process
///
/// This is the only body that is not wrapped in the common envelope, probes
/// read it top-level.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    success: bool,
    message: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
}

/// API Endpoint *GET /health*
///
/// Reports the running version. Accessible without authentication.
#[get("/health")]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        success: true,
        message: "Wedding Website API is running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use test_util::assert_eq_json;

    #[test]
    fn health_status_is_not_enveloped() {
        let status = HealthStatus {
            success: true,
            message: "Wedding Website API is running",
            version: "1.0.0",
            timestamp: DateTime::parse_from_rfc3339("2025-12-18T18:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        assert_eq_json!(
            status,
            {
                "success": true,
                "message": "Wedding Website API is running",
                "version": "1.0.0",
                "timestamp": "2025-12-18T18:00:00Z"
            }
        );
    }
}
