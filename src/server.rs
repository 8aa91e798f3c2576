//! HTTP layer for the analysis service.
//!
//! A single JSON endpoint plus a health probe. CORS is wide open because
//! the public front-end calls the API directly from the browser.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::verdict::{Verdict, VerdictService};
use crate::Error;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VerdictService>,
}

/// Create the router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy"
    }))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    url: Option<String>,
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Verdict>, AppError> {
    let url = request.url.unwrap_or_default();
    let verdict = state.service.analyze(&url).await?;
    Ok(Json(verdict))
}

/// Boundary error wrapper: every service error becomes a 500 with an
/// `{"error": ...}` body, the contract the front-end expects.
struct AppError(Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
