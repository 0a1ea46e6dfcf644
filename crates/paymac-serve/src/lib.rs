use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use paymac_core::Secret;

// ── Config ──

pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
    pub secret: Secret,
}

// ── App State ──

struct AppState {
    secret: Secret,
}

// ── Error Handling ──

/// Everything that can go wrong handling a request.
///
/// Externally every variant collapses to an empty-body 400 so callers
/// learn nothing about internals; the distinction between bad input and
/// an internal fault survives only in the logs. A failed verification
/// is not an error (it is a 200 with `false`).
enum ApiError {
    MissingSalary,
    BadBody(JsonRejection),
    BadQuery(QueryRejection),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingSalary => {
                tracing::debug!("employee request rejected: blank or missing salary")
            }
            ApiError::BadBody(rej) => tracing::debug!("employee request rejected: {rej}"),
            ApiError::BadQuery(rej) => tracing::debug!("verify request rejected: {rej}"),
            ApiError::Internal(err) => tracing::error!("request failed: {err:#}"),
        }
        StatusCode::BAD_REQUEST.into_response()
    }
}

// ── Entrypoint ──

pub async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let app = router(config.secret);
    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("paymac HTTP server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router (for testing without binding to a port).
pub fn router(secret: Secret) -> Router {
    let state = Arc::new(AppState { secret });
    Router::new()
        .route("/api/health", get(health))
        .route("/api/employee", post(create_employee))
        .route("/api/verify", get(verify_hmac))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

// ── POST /api/employee ──

#[derive(Deserialize)]
struct EmployeeBody {
    #[serde(rename = "empName", default)]
    emp_name: Option<String>,
    #[serde(rename = "empSalary", default)]
    emp_salary: Option<String>,
}

#[derive(Serialize)]
struct EmployeeResponse {
    #[serde(rename = "empName")]
    emp_name: Option<String>,
    /// The salary field carries the digest on the way out, matching
    /// the inbound field name.
    #[serde(rename = "empSalary")]
    emp_salary: String,
}

async fn create_employee(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EmployeeBody>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let Json(employee) = body.map_err(ApiError::BadBody)?;

    // Trim only for the emptiness check; the digest covers the salary
    // exactly as received.
    let salary = employee.emp_salary.as_deref().unwrap_or("");
    if salary.trim().is_empty() {
        return Err(ApiError::MissingSalary);
    }

    let digest = paymac_core::compute(salary, &state.secret)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(EmployeeResponse {
        emp_name: employee.emp_name,
        emp_salary: digest,
    }))
}

// ── GET /api/verify ──

#[derive(Deserialize)]
struct VerifyQuery {
    salary: String,
    hmac: String,
}

async fn verify_hmac(
    State(state): State<Arc<AppState>>,
    params: Result<Query<VerifyQuery>, QueryRejection>,
) -> Result<Json<bool>, ApiError> {
    let Query(params) = params.map_err(ApiError::BadQuery)?;
    let valid = paymac_core::verify(&params.salary, &state.secret, &params.hmac)
        .map_err(|e| ApiError::Internal(e.into()))?;
    Ok(Json(valid))
}

// ── Tests ──
