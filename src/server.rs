//! HTTP front end for the trajectory engine.
//!
//! Routes:
//! - `POST /api/calculate`: JSON `TrajectoryInput` in, JSON sample array out
//! - `GET /health`: liveness probe
//!
//! Every error is reported as `400 {"error": "..."}`. Security headers are
//! attached to every response, including 404s.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use crate::error::BallisticsError;
use crate::inputs::TrajectoryInput;
use crate::trajectory_solver::{SolverOptions, TrajectorySolver};

/// Runtime configuration of the HTTP service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub solver: SolverOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            solver: SolverOptions {
                max_distance: Some(5000.0),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AppState {
    solver: SolverOptions,
}

/// Request failures, rendered as a JSON error body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<BallisticsError> for ApiError {
    fn from(err: BallisticsError) -> Self {
        // Stalls come from the request parameters too, so they are 400s
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Creates the Axum router with all routes
pub fn create_router(solver: SolverOptions) -> Router {
    Router::new()
        .route("/api/calculate", post(handle_calculate))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)
        .with_state(AppState { solver })
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "drift ballistics calculator listening");
    axum::serve(listener, create_router(config.solver))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Handle calculate request
async fn handle_calculate(
    State(state): State<AppState>,
    payload: Result<Json<TrajectoryInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected calculate request body");
    })?;

    // The solve is CPU-bound and quadratic in distance
    let solver = TrajectorySolver::with_options(input, state.solver);
    let result = tokio::task::spawn_blocking(move || solver.solve())
        .await
        .map_err(|err| ApiError::Internal(format!("trajectory task failed: {err}")))?;

    match result {
        Ok(samples) => {
            info!(
                rows = samples.len(),
                target_distance = input.target_distance,
                "trajectory computed"
            );
            let cache = (header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            Ok(([cache], Json(samples)).into_response())
        }
        Err(err) => {
            warn!(%err, "trajectory rejected");
            Err(err.into())
        }
    }
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

