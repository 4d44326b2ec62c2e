use actix_web::{http::StatusCode, route, web, HttpResponse};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::state::AppState;
use crate::types::{ChatBody, ErrorResponse, INVALID_INPUT};

/// GET|POST /chat - Summarize `{prompt}` into `{title, description}`
///
/// The body is parsed leniently so a missing or malformed body reads as an
/// empty prompt.
#[route("/chat", method = "GET", method = "POST")]
pub async fn chat(
    body: web::Bytes,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let prompt = serde_json::from_slice::<ChatBody>(&body)
        .unwrap_or_default()
        .prompt
        .unwrap_or_default();

    info!("Chat request - Prompt length: {}", prompt.len());

    match state.summarizer.summarize(&prompt).await {
        Ok(digest) => {
            info!(
                "Chat request completed - Chunks: {}, Summary length: {}",
                digest.chunk_count,
                digest.joined_summary.len()
            );
            Ok(HttpResponse::Ok().json(digest.synthesis.into_result()))
        }
        Err(e) if e.is_invalid_input() => {
            warn!("Rejected chat request: {}", e);
            Ok(HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(INVALID_INPUT))
        }
        Err(e) => {
            error!("Chat request failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}
