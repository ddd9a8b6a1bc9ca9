use newscheck_logging::{nc_debug, nc_info};

use crate::{DraftSubmission, PredictionResult};

/// Generation token identifying one submission attempt.
pub type RequestId = u64;

pub const SERVICE_ERROR_FALLBACK: &str = "Failed to analyze the article";
pub const TRANSPORT_ERROR_FALLBACK: &str = "An error occurred while analyzing the article";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(DraftSubmission),
    Succeeded(PredictionResult),
    Failed(String),
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        match self {
            SubmissionState::Idle => Phase::Idle,
            SubmissionState::Submitting(_) => Phase::Submitting,
            SubmissionState::Succeeded(_) => Phase::Succeeded,
            SubmissionState::Failed(_) => Phase::Failed,
        }
    }
}

/// Payload-free discriminant of [`SubmissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submission did not produce a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The service answered with a non-success status.
    Service { status: u16, detail: Option<String> },
    /// No usable response was obtained.
    Transport { message: Option<String> },
}

impl SubmissionError {
    /// Text shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Service { detail, .. } => detail
                .as_deref()
                .filter(|detail| !detail.is_empty())
                .unwrap_or(SERVICE_ERROR_FALLBACK)
                .to_string(),
            SubmissionError::Transport { message } => message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(TRANSPORT_ERROR_FALLBACK)
                .to_string(),
        }
    }
}

pub type SubmissionOutcome = Result<PredictionResult, SubmissionError>;

/// Owns the submission state machine and the current generation token.
///
/// Completions are applied only when they carry the current token, so a
/// response that arrives after a reset or a newer submit is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    generation: RequestId,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Token of the request currently in flight, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.state {
            SubmissionState::Submitting(_) => Some(self.generation),
            _ => None,
        }
    }

    /// Starts a submission. Returns `None` while another one is in flight.
    ///
    /// The caller is responsible for only passing submittable drafts.
    pub fn submit(&mut self, draft: DraftSubmission) -> Option<RequestId> {
        if let SubmissionState::Submitting(_) = self.state {
            nc_debug!("submit ignored: request {} still in flight", self.generation);
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        nc_info!(
            "submitting request {} title_len={} text_len={}",
            self.generation,
            draft.title.len(),
            draft.text.len()
        );
        self.state = SubmissionState::Submitting(draft);
        Some(self.generation)
    }

    /// Returns to `Idle` and invalidates any in-flight request.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = SubmissionState::Idle;
    }

    /// Applies a completion. Returns `false` when it was stale and discarded.
    pub fn resolve(&mut self, request_id: RequestId, outcome: SubmissionOutcome) -> bool {
        if self.in_flight() != Some(request_id) {
            nc_debug!(
                "discarding stale completion for request {} (current generation {})",
                request_id,
                self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(result) => {
                nc_info!(
                    "request {} succeeded: {} ({})",
                    request_id,
                    result.label,
                    result.confidence
                );
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                let message = err.user_message();
                nc_info!("request {} failed: {}", request_id, message);
                SubmissionState::Failed(message)
            }
        };
        true
    }
}
