pub mod model;
pub mod session;
pub mod step;

pub use model::{Audience, Language, Occasion, SpeechLength, Template, Tone, WizardData};
pub use session::{Command, FieldValue, Submission, WizardSession};
pub use step::Step;
