//! Service info route.

use axum::Json;
use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Customer registry API",
    })
}
