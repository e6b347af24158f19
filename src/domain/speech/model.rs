use super::dto::GenerateSpeechResponse;
use crate::domain::wizard::WizardData;
use serde_json::Value as JsonValue;

/// A speech returned by the generation service, tagged with a snapshot
/// of the parameters that produced it. Lives until the wizard is reset
/// or a later submission replaces it.
#[derive(Debug, Clone)]
pub struct GeneratedSpeech {
    pub speech: String,
    pub structure: JsonValue,
    pub suggestions: JsonValue,
    pub metadata: WizardData,
}

impl GeneratedSpeech {
    /// Tag a service response with the parameters in effect at submit time
    pub fn from_response(response: GenerateSpeechResponse, parameters: WizardData) -> Self {
        Self {
            speech: response.speech,
            structure: response.structure,
            suggestions: response.suggestions,
            metadata: parameters,
        }
    }
}
