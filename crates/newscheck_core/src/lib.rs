//! newscheck core: pure submission state machine, draft validation and
//! result presentation. No IO happens here; network and persistence work is
//! requested through [`Effect`] values.
mod controller;
mod display;
mod draft;
mod effect;
mod msg;
mod prediction;
mod state;
mod theme;
mod update;
mod view_model;

pub use controller::{
    Phase, RequestId, SubmissionController, SubmissionError, SubmissionOutcome, SubmissionState,
    SERVICE_ERROR_FALLBACK, TRANSPORT_ERROR_FALLBACK,
};
pub use display::{confidence_percent, to_view_model, Badge, DisplayModel, FeatureBreakdown, Tone};
pub use draft::{
    is_submittable, missing_requirements, DraftSubmission, Field, Requirement, SOURCE_MAX_CHARS,
    TEXT_MAX_CHARS, TEXT_MIN_CHARS, TITLE_MAX_CHARS,
};
pub use effect::Effect;
pub use msg::Msg;
pub use prediction::{ArticleFeatures, Label, PredictionResult};
pub use state::AppState;
pub use theme::{Theme, UnknownTheme};
pub use update::update;
pub use view_model::{AppViewModel, DraftView, Panel};
