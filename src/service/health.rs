use chrono::Utc;
use serde::Serialize;

pub const SERVICE_NAME: &str = "tarifit-content-service";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub build_time: String,
    pub timestamp: String,
}

/// Liveness only; the database is not probed
#[derive(Debug, Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn status(&self) -> HealthStatus {
        HealthStatus {
            status: "UP".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_time: env!("BUILD_TIME").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
