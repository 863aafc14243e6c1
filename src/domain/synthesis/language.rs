use serde::{Deserialize, Serialize};

/// BCP-47 language codes supported by the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "de-DE")]
    German,
    #[serde(rename = "nl-NL")]
    Dutch,
}

impl Language {
    /// Get the BCP-47 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US",
            Language::German => "de-DE",
            Language::Dutch => "nl-NL",
        }
    }

    /// Default WaveNet voice for this language
    pub fn default_voice(&self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US-Wavenet-F",
            Language::German => "de-DE-Wavenet-F",
            Language::Dutch => "nl-NL-Wavenet-F",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::EnglishUs
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio encodings accepted by the synthesize endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Mp3,
    Linear16,
    OggOpus,
}

impl AudioEncoding {
    /// Wire name used by the Google TTS API
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "MP3",
            AudioEncoding::Linear16 => "LINEAR16",
            AudioEncoding::OggOpus => "OGG_OPUS",
        }
    }

    /// Content type for serving the synthesized audio
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "audio/mpeg",
            // LINEAR16 responses carry a WAV header
            AudioEncoding::Linear16 => "audio/wav",
            AudioEncoding::OggOpus => "audio/ogg",
        }
    }
}

impl Default for AudioEncoding {
    fn default() -> Self {
        AudioEncoding::Mp3
    }
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
