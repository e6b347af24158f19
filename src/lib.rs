pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::speech::GeneratedSpeech;
pub use domain::wizard::{Command, FieldValue, Step, Submission, WizardData, WizardSession};
pub use error::{GenerationError, GenerationResult};
pub use infrastructure::generation::{GenerationClient, SpeechGenerator};
