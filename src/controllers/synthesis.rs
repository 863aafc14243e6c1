use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::synthesis::{SynthesisService, SynthesisServiceApi, SynthesizeRequest},
    error::{AppError, AppResult},
};

/// Google rejects inputs over 5,000 characters; fail fast instead
const MAX_TEXT_CHARS: usize = 5000;

pub struct SynthesisController {
    synthesis_service: Arc<SynthesisService>,
}

impl SynthesisController {
    pub fn new(synthesis_service: Arc<SynthesisService>) -> Self {
        Self { synthesis_service }
    }

    /// POST /api/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<SynthesisController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input before any provider contact
        let char_count = request.text.trim().chars().count();

        if char_count == 0 {
            return Err(AppError::BadRequest(
                "Please enter some text to convert".to_string(),
            ));
        }

        if char_count > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {} characters or less",
                MAX_TEXT_CHARS
            )));
        }

        let result = controller
            .synthesis_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            result
                .encoding
                .content_type()
                .parse()
                .map_err(|_| AppError::Internal("Invalid content type".to_string()))?,
        );
        headers.insert(
            "X-Character-Count",
            result
                .char_count
                .to_string()
                .parse()
                .map_err(|_| AppError::Internal("Invalid header value".to_string()))?,
        );
        headers.insert(
            "X-Voice-Used",
            result
                .voice
                .parse()
                .map_err(|_| AppError::Internal("Invalid header value".to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
