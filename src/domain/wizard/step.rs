use super::model::WizardData;

/// The five wizard steps, in order. Transitions are declared here rather
/// than inferred from an index: `successor`/`predecessor` define the
/// edges and `can_leave` defines the guard on the forward edge.
///
/// `Review` deliberately has no `successor`: its only forward transition
/// is a successful submission, driven by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Context,
    Tone,
    Template,
    Review,
    Result,
}

impl Step {
    /// Ordinal position, 0-based
    pub fn index(&self) -> u8 {
        match self {
            Step::Context => 0,
            Step::Tone => 1,
            Step::Template => 2,
            Step::Review => 3,
            Step::Result => 4,
        }
    }

    /// The step reached by advancing, if advancing is a declared transition
    pub fn successor(&self) -> Option<Step> {
        match self {
            Step::Context => Some(Step::Tone),
            Step::Tone => Some(Step::Template),
            Step::Template => Some(Step::Review),
            Step::Review | Step::Result => None,
        }
    }

    /// The step reached by retreating, if there is one
    pub fn predecessor(&self) -> Option<Step> {
        match self {
            Step::Context => None,
            Step::Tone => Some(Step::Context),
            Step::Template => Some(Step::Tone),
            Step::Review => Some(Step::Template),
            Step::Result => Some(Step::Review),
        }
    }

    /// Guard on the forward edge out of this step. The context step
    /// requires occasion and audience; the template step requires a
    /// template. The tone step is unguarded.
    pub fn can_leave(&self, data: &WizardData) -> bool {
        match self {
            Step::Context => data.occasion.is_some() && data.audience.is_some(),
            Step::Template => data.template.is_some(),
            Step::Tone | Step::Review | Step::Result => true,
        }
    }
}
