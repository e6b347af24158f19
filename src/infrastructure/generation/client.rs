use super::SpeechGenerator;
use crate::domain::speech::{GenerateSpeechRequest, GenerateSpeechResponse, HealthStatus};
use crate::domain::wizard::WizardData;
use crate::error::{GenerationError, GenerationResult};
use crate::infrastructure::config::Config;
use async_trait::async_trait;

const HEALTH_PATH: &str = "/health";
const GENERATE_SPEECH_PATH: &str = "/api/generate-speech";

/// HTTP façade over the speech generation service. Stateless: every
/// call is independent, with no retry and no timeout beyond the
/// transport default.
pub struct GenerationClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.speech_api_url.clone())
    }

    /// Probe the service's health endpoint
    pub async fn check_health(&self) -> GenerationResult<HealthStatus> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status: HealthStatus =
            serde_json::from_str(&body).map_err(|e| GenerationError::Protocol(e.to_string()))?;

        tracing::info!(body = %status.0, "generation service health check ok");
        Ok(status)
    }

    /// Request a speech from the generation service
    pub async fn generate_speech(
        &self,
        data: &WizardData,
    ) -> GenerationResult<GenerateSpeechResponse> {
        let request = GenerateSpeechRequest::from(data);
        let url = format!("{}{}", self.base_url, GENERATE_SPEECH_PATH);

        tracing::info!(
            occasion = %request.occasion,
            audience = %request.audience,
            tone = %request.tone,
            length_minutes = %request.length,
            template = %request.template,
            language = %request.language,
            "Requesting speech generation"
        );

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Failure bodies are undefined; only the status is reported.
            return Err(GenerationError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let speech: GenerateSpeechResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Protocol(e.to_string()))?;

        tracing::info!(
            speech_length = speech.speech.len(),
            "Speech generation succeeded"
        );
        Ok(speech)
    }
}

#[async_trait]
impl SpeechGenerator for GenerationClient {
    async fn generate(&self, data: &WizardData) -> GenerationResult<GenerateSpeechResponse> {
        self.generate_speech(data).await
    }
}
