use serde::{Deserialize, Serialize};

/// Occasion the speech is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Conference,
    PressConference,
    CorporateEvent,
    DiplomaticMeeting,
    Commemoration,
    PolicyAnnouncement,
}

impl Occasion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Conference => "conference",
            Occasion::PressConference => "press-conference",
            Occasion::CorporateEvent => "corporate-event",
            Occasion::DiplomaticMeeting => "diplomatic-meeting",
            Occasion::Commemoration => "commemoration",
            Occasion::PolicyAnnouncement => "policy-announcement",
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audience the speech addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    Diplomats,
    BusinessLeaders,
    Media,
    GeneralPublic,
    GovernmentOfficials,
    AcademicAudience,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Diplomats => "diplomats",
            Audience::BusinessLeaders => "business-leaders",
            Audience::Media => "media",
            Audience::GeneralPublic => "general-public",
            Audience::GovernmentOfficials => "government-officials",
            Audience::AcademicAudience => "academic-audience",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of voice requested from the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Formal,
    Conversational,
    Inspiring,
    Urgent,
    Conciliatory,
    Celebratory,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Conversational => "conversational",
            Tone::Inspiring => "inspiring",
            Tone::Urgent => "urgent",
            Tone::Conciliatory => "conciliatory",
            Tone::Celebratory => "celebratory",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target speech length in minutes, restricted to the values the
/// review form offers. The wire protocol carries the minute count as a
/// string, see `GenerateSpeechRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechLength {
    Min2,
    #[default]
    Min5,
    Min10,
    Min15,
    Min20,
    Min25,
    Min30,
    Min35,
    Min40,
}

impl SpeechLength {
    pub fn minutes(&self) -> u32 {
        match self {
            SpeechLength::Min2 => 2,
            SpeechLength::Min5 => 5,
            SpeechLength::Min10 => 10,
            SpeechLength::Min15 => 15,
            SpeechLength::Min20 => 20,
            SpeechLength::Min25 => 25,
            SpeechLength::Min30 => 30,
            SpeechLength::Min35 => 35,
            SpeechLength::Min40 => 40,
        }
    }
}

impl std::fmt::Display for SpeechLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// Structural template the generated speech should follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    CrisisResponse,
    PolicyAnnouncement,
    DiplomaticKeynote,
    Commemorative,
    Persuasive,
    Informational,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::CrisisResponse => "crisis-response",
            Template::PolicyAnnouncement => "policy-announcement",
            Template::DiplomaticKeynote => "diplomatic-keynote",
            Template::Commemorative => "commemorative",
            Template::Persuasive => "persuasive",
            Template::Informational => "informational",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output languages supported by the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Dutch,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Dutch => "dutch",
            Language::French => "french",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters accumulated across the wizard steps. Owned exclusively by
/// the session; `occasion`, `audience` and `template` start absent and
/// gate the step transitions that need them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardData {
    pub occasion: Option<Occasion>,
    pub audience: Option<Audience>,
    pub tone: Tone,
    pub length: SpeechLength,
    pub template: Option<Template>,
    pub topic: String,
    pub additional_context: String,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_defaults() {
        let data = WizardData::default();
        assert_eq!(data.occasion, None);
        assert_eq!(data.audience, None);
        assert_eq!(data.tone, Tone::Formal);
        assert_eq!(data.length, SpeechLength::Min5);
        assert_eq!(data.template, None);
        assert_eq!(data.topic, "");
        assert_eq!(data.additional_context, "");
        assert_eq!(data.language, Language::English);
    }

    #[test]
    fn test_enum_wire_names_are_kebab_case() {
        assert_eq!(Occasion::PressConference.as_str(), "press-conference");
        assert_eq!(Audience::GovernmentOfficials.as_str(), "government-officials");
        assert_eq!(Template::DiplomaticKeynote.as_str(), "diplomatic-keynote");
        assert_eq!(Tone::Conciliatory.as_str(), "conciliatory");
        assert_eq!(Language::Dutch.as_str(), "dutch");
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Occasion::CorporateEvent).unwrap();
        assert_eq!(json, "\"corporate-event\"");
        let json = serde_json::to_string(&Audience::BusinessLeaders).unwrap();
        assert_eq!(json, "\"business-leaders\"");
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, "\"french\"");
    }

    #[test]
    fn test_length_renders_as_minute_count() {
        assert_eq!(SpeechLength::Min2.to_string(), "2");
        assert_eq!(SpeechLength::Min40.minutes(), 40);
        assert_eq!(SpeechLength::default().minutes(), 5);
    }
}
