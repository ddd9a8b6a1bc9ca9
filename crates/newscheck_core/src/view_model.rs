use crate::{DisplayModel, Phase, Requirement, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftView {
    pub title: String,
    pub text: String,
    pub source: String,
    pub title_chars: usize,
    pub text_chars: usize,
    pub source_chars: usize,
    /// Text has been started but is still under the minimum length.
    pub text_below_minimum: bool,
}

/// The one status region shown for the current phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Idle: which rules still block the submit action (empty when ready).
    Gate { missing: Vec<Requirement> },
    Loading,
    ErrorBanner { message: String },
    Result(DisplayModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub draft: DraftView,
    pub inputs_enabled: bool,
    pub submit_enabled: bool,
    pub panel: Panel,
    pub theme: Theme,
    pub dirty: bool,
}
