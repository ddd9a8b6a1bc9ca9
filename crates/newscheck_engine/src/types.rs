use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub title: String,
    pub text: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Label {
    Real,
    Fake,
}

/// Successful body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub label: Label,
    pub probability: f64,
    pub confidence: String,
    pub explanation: String,
    #[serde(default)]
    pub features: Option<FeatureSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureSet {
    pub title_length: u64,
    pub word_count: u64,
    pub text_length: u64,
    pub source: String,
    pub has_sensational_title: bool,
    pub title_has_caps: bool,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PredictionCompleted {
        request_id: RequestId,
        result: Result<PredictionResponse, ClassifyError>,
    },
    HealthChecked {
        result: Result<HealthStatus, ClassifyError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ClassifyError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClassifyError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the service itself answered (as opposed to a transport failure).
    pub fn is_service_error(&self) -> bool {
        matches!(self.kind, FailureKind::HttpStatus { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Non-success status; `detail` is the service's `detail` string, if any.
    HttpStatus { status: u16, detail: Option<String> },
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
