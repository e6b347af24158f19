pub mod dto;
pub mod model;

pub use dto::{GenerateSpeechRequest, GenerateSpeechResponse, HealthStatus};
pub use model::GeneratedSpeech;
