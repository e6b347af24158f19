pub mod client;

pub use client::GenerationClient;

use crate::domain::speech::GenerateSpeechResponse;
use crate::domain::wizard::WizardData;
use crate::error::GenerationResult;
use async_trait::async_trait;

/// Boundary to the speech generation service.
///
/// The wizard session only depends on this trait, so it can be driven
/// by a mock without any network. `GenerationClient` is the HTTP
/// implementation.
#[async_trait]
pub trait SpeechGenerator: Send + Sync {
    /// Generate a speech from the accumulated wizard parameters
    ///
    /// # Errors
    /// Returns `Transport` if the call could not complete, `Http` on a
    /// non-2xx status, `Protocol` if the body is not valid JSON.
    async fn generate(&self, data: &WizardData) -> GenerationResult<GenerateSpeechResponse>;
}
