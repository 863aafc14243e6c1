use super::SynthesisClient;
use crate::domain::synthesis::{AudioEncoding, Language};
use async_trait::async_trait;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Google Cloud Text-to-Speech implementation over the REST API.
///
/// Audio comes back base64-encoded in the `audioContent` field; failures
/// carry a JSON `error.message` which is surfaced verbatim.
pub struct GoogleTtsClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeBody<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl GoogleTtsClient {
    pub fn new(http: reqwest::Client, api_key: String, endpoint: String) -> Self {
        Self {
            http,
            api_key,
            endpoint,
        }
    }

    /// Decode the base64 `audioContent` of a successful response
    fn decode_audio(body: &str) -> Result<Vec<u8>, String> {
        let response: SynthesizeResponse = serde_json::from_str(body)
            .map_err(|e| format!("Unexpected response from speech provider: {}", e))?;
        base64::engine::general_purpose::STANDARD
            .decode(response.audio_content)
            .map_err(|e| format!("Provider returned malformed audio content: {}", e))
    }

    /// Pull `error.message` out of a failure body, falling back to the raw
    /// body when it is not the documented JSON shape
    fn extract_error_message(status: reqwest::StatusCode, body: &str) -> String {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| body.trim().to_string());

        if message.is_empty() {
            format!("Speech provider returned HTTP {}", status.as_u16())
        } else {
            message
        }
    }
}

#[async_trait]
impl SynthesisClient for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        voice: &str,
        encoding: AudioEncoding,
    ) -> Result<Vec<u8>, String> {
        let body = SynthesizeBody {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: language.as_str(),
                name: voice,
            },
            audio_config: AudioConfig {
                audio_encoding: encoding.as_str(),
            },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %language,
            voice = voice,
            encoding = %encoding,
            text_length = text.len(),
            "Calling Google TTS text:synthesize"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Google TTS request failed to send");
                format!("Could not reach speech provider: {}", e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read Google TTS response body");
            format!("Failed to read provider response: {}", e)
        })?;

        if !status.is_success() {
            let message = Self::extract_error_message(status, &body);
            tracing::error!(
                status = status.as_u16(),
                message = %message,
                voice = voice,
                "Google TTS synthesis failed"
            );
            return Err(message);
        }

        let audio_bytes = Self::decode_audio(&body)?;
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Google TTS audio received"
        );

        Ok(audio_bytes)
    }
}
