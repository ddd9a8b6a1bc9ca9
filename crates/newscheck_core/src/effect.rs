use crate::{DraftSubmission, RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the draft to the prediction service, tagged with its generation.
    SubmitPrediction {
        request_id: RequestId,
        draft: DraftSubmission,
    },
    /// Store the theme preference.
    PersistTheme { theme: Theme },
}
