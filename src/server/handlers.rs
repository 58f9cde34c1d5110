//! HTTP route handlers.
//!
//! Every failure is converted into the uniform `{ success, data, error }`
//! envelope; nothing here panics or leaves a request unanswered.

use crate::{
    error::StudioError,
    gemini::ContentGenerator,
    models::{GenerationRequest, GenerationResult},
    server::state::AppState,
};
use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

const MISSING_KEY_MESSAGE: &str = "API key is not configured on the server.";

/// Turns any studio error into the envelope, with the status the error maps
/// to.
fn error_response(error: &StudioError) -> HttpResponse {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(GenerationResult::err(error.to_string()))
}

/// `POST /api/generate` — the single generation/analysis endpoint.
pub async fn generate<G: ContentGenerator + 'static>(
    state: web::Data<AppState<G>>,
    body: web::Bytes,
) -> HttpResponse {
    let studio = match &state.studio {
        Some(studio) => studio,
        None => {
            log::error!("Generation request refused: {}", MISSING_KEY_MESSAGE);
            return error_response(&StudioError::ConfigError(MISSING_KEY_MESSAGE.into()));
        }
    };

    let request: GenerationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Rejected malformed request body: {}", e);
            return error_response(&StudioError::BadRequest("Invalid JSON body".into()));
        }
    };

    log::info!(
        "Handling feature '{}' (face_ref: {}, source_img: {})",
        request.feature_id,
        request.face_ref().is_some(),
        request.source_img().is_some()
    );

    match studio.handle(&request).await {
        Ok(data) => HttpResponse::Ok().json(GenerationResult::ok(data)),
        Err(e) => {
            log::error!("Feature '{}' failed: {}", request.feature_id, e);
            error_response(&e)
        }
    }
}

/// CORS preflight for clients whose requests bypass the CORS middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .content_type("application/json")
        .finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(GenerationResult::err("Method Not Allowed"))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn list_features<G: ContentGenerator + 'static>(
    state: web::Data<AppState<G>>,
) -> HttpResponse {
    HttpResponse::Ok().json(&state.features)
}

pub async fn list_styles<G: ContentGenerator + 'static>(
    state: web::Data<AppState<G>>,
) -> HttpResponse {
    HttpResponse::Ok().json(&state.styles)
}

pub async fn list_prompts<G: ContentGenerator + 'static>(
    state: web::Data<AppState<G>>,
) -> HttpResponse {
    HttpResponse::Ok().json(&state.prompts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status_follows_error_kind() {
        let bad_request = error_response(&StudioError::BadRequest("Invalid JSON body".into()));
        assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

        let missing_key = error_response(&StudioError::ConfigError(MISSING_KEY_MESSAGE.into()));
        assert_eq!(missing_key.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let refused = error_response(&StudioError::NoImage("the model declined".into()));
        assert_eq!(refused.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
