pub mod error;
pub mod language;
pub mod service;

use serde::{Deserialize, Serialize};

pub use error::SynthesisServiceError;
pub use language::{AudioEncoding, Language};
pub use service::{SynthesisResult, SynthesisService, SynthesisServiceApi};

/// Request for POST /api/synthesize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default)]
    pub encoding: AudioEncoding,
}

impl SynthesizeRequest {
    /// Voice to use: the requested one, or the language default
    pub fn resolved_voice(&self) -> String {
        self.voice
            .clone()
            .unwrap_or_else(|| self.language.default_voice().to_string())
    }
}
