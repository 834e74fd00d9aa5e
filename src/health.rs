//! HTTP health-check listener
//!
//! The hosting platform probes this endpoint to decide the process is
//! alive. It shares nothing with bot state and runs for the whole process
//! lifetime in its own task.

use axum::{routing::get, Router};
use tracing::info;

use crate::utils::errors::Result;

/// Serve the health endpoint on the given port, never returns on success
pub async fn serve(port: u16) -> Result<()> {
    let app = Router::new().route("/", get(alive));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "Health check listener ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn alive() -> &'static str {
    "Sakura bot is alive!"
}
