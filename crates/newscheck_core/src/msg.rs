#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User changed one of the draft fields.
    FieldEdited { field: crate::Field, value: String },
    /// User asked for the current draft to be analyzed.
    SubmitClicked,
    /// User cleared the form or asked to analyze another article.
    ResetClicked,
    /// User flipped between light and dark theme.
    ThemeToggled,
    /// Engine finished a prediction request.
    PredictionCompleted {
        request_id: crate::RequestId,
        outcome: crate::SubmissionOutcome,
    },
}
