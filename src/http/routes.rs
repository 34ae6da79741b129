//! HTTP endpoints of the compile service.

use std::collections::BTreeMap;

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::{self, ExampleEntry};
use crate::core::domain::{CompileOutcome, CompileRequest};
use crate::core::errors::CompileError;
use crate::http::error::ApiError;
use crate::http::state::AppState;

/// Builds the service router. The browser editor calls these endpoints
/// cross-origin, hence the permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/compile", post(compile))
        .route("/examples", get(examples))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    compiler_available: bool,
    language: &'static str,
}

/// `GET /health`
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        compiler_available: state.compiler_available(),
        language: "59LANG",
    })
}

/// `POST /compile`
#[tracing::instrument(skip_all)]
async fn compile(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CompileOutcome>, ApiError> {
    let Json(body) = body.map_err(|rejection| CompileError::InvalidRequest {
        msg: rejection.body_text(),
    })?;

    let request = CompileRequest::try_from(body)?;
    let outcome = state.service.compile(&request).await?;

    Ok(Json(outcome))
}

/// `GET /examples`
async fn examples() -> Json<BTreeMap<&'static str, ExampleEntry>> {
    Json(catalog::all())
}
