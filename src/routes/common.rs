//! Operational routes: the liveness banner at `/`, plus health, readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

const BANNER: &str = "doctor is running";

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl Probe {
    const ALIVE: Probe = Probe {
        status: "ok",
        database: None,
    };

    fn database(reachable: bool) -> (StatusCode, Json<Probe>) {
        let (code, status, database) = if reachable {
            (StatusCode::OK, "ok", "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        };
        (
            code,
            Json(Probe {
                status,
                database: Some(database),
            }),
        )
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { BANNER }))
        .route("/health", get(|| async { Json(Probe::ALIVE) }))
        .route(
            "/ready",
            get(|State(state): State<AppState>| async move {
                let reachable = match state.store.ping().await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "readiness check failed");
                        false
                    }
                };
                Probe::database(reachable)
            }),
        )
        .route("/version", get(|| async { Json(BUILD) }))
        .with_state(state)
}
