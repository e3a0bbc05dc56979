//! HTTP surface serving the generated scripts.
//!
//! Two endpoints, matching what RouterOS `/tool fetch` consumers expect:
//!
//! - `GET /lists/all`: every list's script concatenated, or 500 with a JSON
//!   error body if any list fails (all-or-nothing).
//! - `GET /list/{name}`: one list's script, 404 for unknown names, 500
//!   on generation failure.
//!
//! Success bodies are plain text; failure bodies are `{"error": "..."}`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::generator::{GenerateError, Generator};
use crate::source::Fetch;


/// JSON error body for failure responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Builds the router over a shared generator.
///
/// The generator (and the catalog inside it) is immutable, so one `Arc`
/// serves every in-flight request without locking.
pub fn router<F: Fetch + 'static>(generator: Arc<Generator<F>>) -> Router {
    Router::new()
        .route("/lists/all", get(get_all_lists))
        .route("/list/:name", get(get_list_by_name))
        .layer(TraceLayer::new_for_http())
        .with_state(generator)
}

async fn get_all_lists<F: Fetch>(State(generator): State<Arc<Generator<F>>>) -> Response {
    let report = generator.generate_all().await;

    // All-or-nothing for the aggregate endpoint: surface the first
    // failing list rather than an incomplete script.
    if let Some((list, e)) = report.failures.iter().next() {
        error!(list, error = %e, "batch generation failed");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    (StatusCode::OK, report.concatenated()).into_response()
}

async fn get_list_by_name<F: Fetch>(
    State(generator): State<Arc<Generator<F>>>,
    Path(name): Path<String>,
) -> Response {
    match generator.generate_list(&name).await {
        Ok(script) => (StatusCode::OK, script).into_response(),
        Err(e @ GenerateError::NotFound { .. }) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e) => {
            error!(list = %name, error = %e, "list generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Binds the listen address and serves until ctrl-c.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server
/// fails while running.
pub async fn serve<F: Fetch + 'static>(
    generator: Arc<Generator<F>>,
    listen: &str,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(addr = listen, "serving address-list scripts");

    axum::serve(listener, router(generator))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
