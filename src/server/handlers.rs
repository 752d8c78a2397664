use super::error::{error_response, ApiError, INTERNAL_ERROR_MESSAGE};
use crate::core::{OptimizationResult, ServiceHealth};
use crate::io::parse_boundaries;
use crate::observability::panic_hook::payload_message;
use crate::optimizer::Optimizer;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;

const REQUEST_BODY: &str = "request body";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub metrics: Vec<ServiceHealth>,
}

pub async fn optimize(
    State(optimizer): State<Arc<Optimizer>>,
    body: Bytes,
) -> Result<Json<OptimizationResult>, ApiError> {
    let boundaries = parse_boundaries(&body, REQUEST_BODY)?;
    let result = optimizer.optimize_boundaries(&boundaries)?;
    Ok(Json(result))
}

pub async fn health(
    State(optimizer): State<Arc<Optimizer>>,
    body: Bytes,
) -> Result<Json<HealthResponse>, ApiError> {
    let boundaries = parse_boundaries(&body, REQUEST_BODY)?;
    let metrics = optimizer.analyze_service_health(&boundaries)?;
    Ok(Json(HealthResponse { metrics }))
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

pub async fn not_found(uri: Uri) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}

/// Turns a panic inside a handler into a generic 500.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    log::error!("Handler panicked: {}", payload_message(payload.as_ref()));
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
