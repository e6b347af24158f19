use crate::domain::wizard::WizardData;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request body for POST /api/generate-speech.
///
/// The service expects all eight fields as strings: absent free-text
/// fields are sent as empty strings and the length as the string form
/// of the minute count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateSpeechRequest {
    pub occasion: String,
    pub audience: String,
    pub tone: String,
    pub length: String,
    pub template: String,
    pub topic: String,
    pub additional_context: String,
    pub language: String,
}

impl From<&WizardData> for GenerateSpeechRequest {
    fn from(data: &WizardData) -> Self {
        Self {
            occasion: data.occasion.map(|o| o.to_string()).unwrap_or_default(),
            audience: data.audience.map(|a| a.to_string()).unwrap_or_default(),
            tone: data.tone.to_string(),
            length: data.length.to_string(),
            template: data.template.map(|t| t.to_string()).unwrap_or_default(),
            topic: data.topic.clone(),
            additional_context: data.additional_context.clone(),
            language: data.language.to_string(),
        }
    }
}

/// Response body of POST /api/generate-speech. `structure` and
/// `suggestions` are carried opaquely; their shape is not validated
/// beyond JSON-parseability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSpeechResponse {
    #[serde(default)]
    pub speech: String,
    #[serde(default)]
    pub structure: JsonValue,
    #[serde(default)]
    pub suggestions: JsonValue,
}

/// Body of GET /health, carried opaquely. Used only as a connectivity
/// probe; the service does not commit to a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus(pub JsonValue);
