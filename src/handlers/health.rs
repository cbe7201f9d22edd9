//! Health check and service banner handlers

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::{
    constants::{API_VERSION, SERVICE_NAME},
    state::AppState,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service banner response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointsInfo,
}

#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    pub health: String,
    pub contests: String,
    pub auth: String,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: API_VERSION.to_string(),
    })
}

/// API information endpoint
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
        endpoints: EndpointsInfo {
            health: "/health".to_string(),
            contests: "/contests".to_string(),
            auth: "/auth".to_string(),
        },
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
