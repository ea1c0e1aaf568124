//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health status of the service or a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    /// Storage backend in use ("mysql" or "memory")
    pub storage: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn new(
        status: HealthStatus,
        service: impl Into<String>,
        version: impl Into<String>,
        storage: impl Into<String>,
    ) -> Self {
        Self {
            status,
            service: service.into(),
            version: version.into(),
            storage: storage.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
