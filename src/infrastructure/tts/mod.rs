pub mod google;

pub use google::GoogleTtsClient;

use crate::domain::synthesis::{AudioEncoding, Language};
use async_trait::async_trait;

/// Client for a cloud speech-synthesis provider.
///
/// Implementations are responsible for:
/// - Provider-specific request encoding and authentication
/// - Extracting the provider's error message text on failure
///
/// One call to `synthesize` maps to exactly one provider request. There is
/// no retry and no partial result.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    /// Synthesize text to speech
    ///
    /// Returns the encoded audio bytes exactly as the provider produced them.
    ///
    /// # Errors
    /// Returns the provider's message text if synthesis fails or the
    /// provider is unreachable
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        voice: &str,
        encoding: AudioEncoding,
    ) -> Result<Vec<u8>, String>;
}
