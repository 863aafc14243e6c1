use super::error::SynthesisServiceError;
use super::language::{AudioEncoding, Language};
use super::SynthesizeRequest;
use crate::infrastructure::tts::SynthesisClient;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice: String,
    pub encoding: AudioEncoding,
    pub char_count: usize,
}

pub struct SynthesisService {
    client: Arc<dyn SynthesisClient>,
}

impl SynthesisService {
    pub fn new(client: Arc<dyn SynthesisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Synthesize text to speech
    ///
    /// Calls the speech provider exactly once. The provider is never
    /// contacted when the text is empty after trimming. Audio bytes are
    /// returned as the provider produced them.
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesisResult, SynthesisServiceError>;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesisResult, SynthesisServiceError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(SynthesisServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let voice = request.resolved_voice();
        let char_count = text.chars().count();

        tracing::info!(
            language = %request.language,
            voice = %voice,
            encoding = %request.encoding,
            text_length = char_count,
            "Synthesis request"
        );

        let start_time = std::time::Instant::now();

        let audio_data = self
            .client
            .synthesize(text, request.language, &voice, request.encoding)
            .await
            .map_err(SynthesisServiceError::Provider)?;

        tracing::info!(
            voice = %voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = char_count,
            audio_size_bytes = audio_data.len(),
            "Synthesis completed"
        );

        Ok(SynthesisResult {
            audio_data,
            voice,
            encoding: request.encoding,
            char_count,
        })
    }
}
