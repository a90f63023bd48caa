use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    pub message: String,
}

/// Liveness endpoint for load balancers and uptime checks.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Liveness check
    ///
    /// Returns a fixed payload while the service is running.
    /// This endpoint does not touch the model API.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "ok".to_string(),
            message: "Backend is running!".to_string(),
        })
    }
}
