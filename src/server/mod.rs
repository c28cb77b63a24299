//! HTTP serving layer.
//!
//! Exposes `GET /metrics`. Every incoming scrape request drives one full
//! collection pass against the upstream; nothing is cached between requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::Result;
use crate::collector::DeepDetectCollector;
use crate::exposition;

/// Build the exporter's router around a shared collector.
pub fn router(collector: Arc<DeepDetectCollector>) -> Router {
    Router::new()
        .route("/metrics", get(serve_metrics))
        .with_state(collector)
}

/// Bind `addr` and serve scrape requests until the task is stopped.
pub async fn serve(addr: SocketAddr, collector: Arc<DeepDetectCollector>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "serving metrics");
    axum::serve(listener, router(collector)).await?;
    Ok(())
}

async fn serve_metrics(State(collector): State<Arc<DeepDetectCollector>>) -> Response {
    let samples = collector.collect().await;
    match exposition::render(&samples) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, exposition::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode scrape output");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to encode metrics: {e}"),
            )
                .into_response()
        }
    }
}
