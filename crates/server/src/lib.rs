//! Synopsis HTTP server
//!
//! Actix-web REST surface over the chunked summarizer

pub mod routes;
pub mod state;
pub mod types;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use synopsis_common::{Result, SynopsisConfig};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Largest accepted request body
const MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: SynopsisConfig) -> Result<()> {
    config.validate()?;

    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Starting server on {} - Model: {}, Token size: {}, Summary timeout: {:?}",
        bind_addr,
        state.config.model,
        state.config.token_size,
        state.config.summary_timeout
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .app_data(web::Data::new(Arc::clone(&state)))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
