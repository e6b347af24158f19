use super::model::{
    Audience, Language, Occasion, SpeechLength, Template, Tone, WizardData,
};
use super::step::Step;
use crate::domain::speech::GeneratedSpeech;
use crate::infrastructure::generation::SpeechGenerator;

/// Lifecycle of the one request a session may have outstanding.
///
/// A single enum instead of separate loading/result/error fields, so
/// states like "loading with a result already set" are unrepresentable.
#[derive(Debug, Clone, Default)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
    Succeeded(GeneratedSpeech),
    Failed(String),
}

/// A single field assignment. Setting a field never validates; guards
/// only apply when leaving a step.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Occasion(Option<Occasion>),
    Audience(Option<Audience>),
    Tone(Tone),
    Length(SpeechLength),
    Template(Option<Template>),
    Topic(String),
    AdditionalContext(String),
    Language(Language),
}

/// The synchronous wizard commands. Submission is the one async
/// operation and lives on the session directly, see
/// [`WizardSession::submit`].
#[derive(Debug, Clone)]
pub enum Command {
    Set(FieldValue),
    Advance,
    Retreat,
    Reset,
}

/// One wizard session: the current step, the parameters accumulated so
/// far and the state of the (at most one) generation request.
///
/// Commands are applied one at a time; a command whose transition is
/// not declared or whose guard fails is a no-op, mirroring a disabled
/// affordance rather than an error.
#[derive(Debug, Default)]
pub struct WizardSession {
    step: Step,
    data: WizardData,
    submission: Submission,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.submission, Submission::InFlight)
    }

    pub fn result(&self) -> Option<&GeneratedSpeech> {
        match &self.submission {
            Submission::Succeeded(speech) => Some(speech),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply one synchronous command to the session
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Set(field) => self.set_field(field),
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Reset => self.reset(),
        }
    }

    fn set_field(&mut self, field: FieldValue) {
        match field {
            FieldValue::Occasion(occasion) => self.data.occasion = occasion,
            FieldValue::Audience(audience) => self.data.audience = audience,
            FieldValue::Tone(tone) => self.data.tone = tone,
            FieldValue::Length(length) => self.data.length = length,
            FieldValue::Template(template) => self.data.template = template,
            FieldValue::Topic(topic) => self.data.topic = topic,
            FieldValue::AdditionalContext(context) => self.data.additional_context = context,
            FieldValue::Language(language) => self.data.language = language,
        }
    }

    fn advance(&mut self) {
        if !self.step.can_leave(&self.data) {
            tracing::debug!(step = self.step.index(), "advance blocked by step guard");
            return;
        }
        if let Some(next) = self.step.successor() {
            self.step = next;
        }
    }

    fn retreat(&mut self) {
        // Retreating never clears the submission outcome; a result
        // reached once stays available until reset or resubmission.
        if let Some(previous) = self.step.predecessor() {
            self.step = previous;
        }
    }

    fn reset(&mut self) {
        // All eight fields return to their defaults, language included.
        self.data = WizardData::default();
        self.submission = Submission::Idle;
        self.step = Step::Context;
    }

    /// Submit the accumulated parameters to the generation service.
    ///
    /// Valid only on the review step and only while no request is
    /// outstanding; otherwise no request is issued. On success the
    /// session moves to the result step; on failure it stays on review
    /// with the failure text stored. Either way the in-flight state is
    /// cleared when the call resolves.
    pub async fn submit(&mut self, generator: &dyn SpeechGenerator) {
        if self.step != Step::Review {
            tracing::debug!(step = self.step.index(), "submit ignored outside review step");
            return;
        }
        if self.is_loading() {
            tracing::debug!("submit ignored while a request is in flight");
            return;
        }

        self.submission = Submission::InFlight;

        match generator.generate(&self.data).await {
            Ok(response) => {
                self.submission =
                    Submission::Succeeded(GeneratedSpeech::from_response(response, self.data.clone()));
                self.step = Step::Result;
            }
            Err(err) => {
                tracing::error!(error = %err, "speech generation failed");
                self.submission = Submission::Failed(err.to_string());
            }
        }
    }
}
