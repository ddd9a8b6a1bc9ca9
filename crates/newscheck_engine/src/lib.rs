//! newscheck engine: prediction service IO and effect execution.
mod classify;
mod engine;
mod persist;
mod types;

pub use classify::{ClassifySettings, Classifier, ReqwestClassifier, DEFAULT_BASE_URL};
pub use engine::{EngineError, EngineHandle};
pub use persist::{ensure_state_dir, read_if_exists, AtomicFileWriter, PersistError};
pub use types::{
    ClassifyError, EngineEvent, FailureKind, FeatureSet, HealthStatus, Label, PredictionRequest,
    PredictionResponse, RequestId,
};
