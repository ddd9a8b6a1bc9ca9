use crate::view_model::{AppViewModel, DraftView, Panel};
use crate::{
    missing_requirements, to_view_model, DraftSubmission, Field, Phase, RequestId,
    SubmissionController, SubmissionOutcome, SubmissionState, Theme, TEXT_MIN_CHARS,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    draft: DraftSubmission,
    controller: SubmissionController,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    /// Starts a session with the theme loaded from the stored preference.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &DraftSubmission {
        &self.draft
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.controller.in_flight()
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = self.phase() == Phase::Submitting;
        let submittable = self.draft.is_submittable();
        let text_chars = self.draft.text.chars().count();

        let panel = match self.controller.state() {
            SubmissionState::Idle => Panel::Gate {
                missing: missing_requirements(&self.draft),
            },
            SubmissionState::Submitting(_) => Panel::Loading,
            SubmissionState::Failed(message) => Panel::ErrorBanner {
                message: message.clone(),
            },
            SubmissionState::Succeeded(result) => Panel::Result(to_view_model(result)),
        };

        AppViewModel {
            phase: self.phase(),
            draft: DraftView {
                title: self.draft.title.clone(),
                text: self.draft.text.clone(),
                source: self.draft.source.clone(),
                title_chars: self.draft.title.chars().count(),
                text_chars,
                source_chars: self.draft.source.chars().count(),
                text_below_minimum: text_chars > 0 && text_chars < TEXT_MIN_CHARS,
            },
            inputs_enabled: !submitting,
            submit_enabled: !submitting && submittable,
            panel,
            theme: self.theme,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn edit_field(&mut self, field: Field, value: &str) {
        if self.draft.set_field(field, value) {
            self.mark_dirty();
        }
    }

    /// Hands a copy of the draft to the controller; the form keeps its fields
    /// until the request succeeds.
    pub(crate) fn begin_submit(&mut self) -> Option<(RequestId, DraftSubmission)> {
        let draft = self.draft.clone();
        let request_id = self.controller.submit(draft.clone())?;
        self.mark_dirty();
        Some((request_id, draft))
    }

    pub(crate) fn resolve(&mut self, request_id: RequestId, outcome: SubmissionOutcome) {
        if !self.controller.resolve(request_id, outcome) {
            return;
        }
        if self.phase() == Phase::Succeeded {
            self.draft = DraftSubmission::default();
        }
        self.mark_dirty();
    }

    pub(crate) fn reset(&mut self) {
        self.controller.reset();
        self.draft = DraftSubmission::default();
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        self.theme
    }
}
