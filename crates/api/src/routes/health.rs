//! Monitoring endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// The two external resources the site needs: the SQLite store and the
/// image upload directory.
#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub uploads: &'static str,
}

/// GET /health -- probes the store and the upload root. A degraded report
/// answers with 503.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database_ok = clubsite_db::health_check(&state.pool).await.is_ok();
    let uploads_ok = tokio::fs::metadata(&state.config.upload_root)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    let code = if database_ok && uploads_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let report = HealthReport {
        status: if code == StatusCode::OK { "ok" } else { "degraded" },
        database: if database_ok { "reachable" } else { "unreachable" },
        uploads: if uploads_ok { "present" } else { "missing" },
    };
    (code, Json(report))
}

/// Mount health check routes at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
