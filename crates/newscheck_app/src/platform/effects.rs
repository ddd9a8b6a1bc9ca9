use std::path::PathBuf;
use std::sync::{mpsc, Arc, Weak};
use std::thread;
use std::time::Duration;

use newscheck_core::{
    ArticleFeatures, Effect, Label, Msg, PredictionResult, SubmissionError, SubmissionOutcome,
};
use newscheck_engine::{
    ClassifyError, ClassifySettings, EngineError, EngineEvent, EngineHandle, FailureKind,
    PredictionRequest, PredictionResponse,
};
use newscheck_logging::{nc_debug, nc_error, nc_info, nc_warn};

use super::app::AppEvent;
use super::persistence;

const EVENT_POLL: Duration = Duration::from_millis(100);

/// Executes core effects: prediction requests go to the engine, theme changes
/// to the preference file. Engine completions are fed back as messages.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        settings: ClassifySettings,
        state_dir: PathBuf,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let engine = Arc::new(EngineHandle::new(settings)?);
        spawn_event_loop(Arc::downgrade(&engine), event_tx);
        Ok(Self { engine, state_dir })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitPrediction { request_id, draft } => {
                    nc_info!(
                        "SubmitPrediction request_id={} source={}",
                        request_id,
                        draft.source
                    );
                    self.engine.classify(
                        request_id,
                        PredictionRequest {
                            title: draft.title,
                            text: draft.text,
                            source: draft.source,
                        },
                    );
                }
                Effect::PersistTheme { theme } => {
                    if let Err(err) = persistence::save_theme(&self.state_dir, theme) {
                        nc_error!("Failed to store theme {}: {}", theme, err);
                    }
                }
            }
        }
    }
}

/// Forwards engine completions until the engine handle is dropped.
fn spawn_event_loop(handle: Weak<EngineHandle>, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(engine) = handle.upgrade() {
            let Some(event) = engine.recv_timeout(EVENT_POLL) else {
                continue;
            };
            match event {
                EngineEvent::PredictionCompleted { request_id, result } => {
                    let msg = Msg::PredictionCompleted {
                        request_id,
                        outcome: map_outcome(result),
                    };
                    if event_tx.send(AppEvent::Msg(msg)).is_err() {
                        break;
                    }
                }
                EngineEvent::HealthChecked { .. } => {
                    nc_debug!("Ignoring health event outside the health command");
                }
            }
        }
    });
}

pub(crate) fn map_outcome(result: Result<PredictionResponse, ClassifyError>) -> SubmissionOutcome {
    result.map(map_prediction).map_err(map_error)
}

fn map_prediction(response: PredictionResponse) -> PredictionResult {
    PredictionResult {
        label: match response.label {
            newscheck_engine::Label::Real => Label::Real,
            newscheck_engine::Label::Fake => Label::Fake,
        },
        probability: response.probability,
        confidence: response.confidence,
        explanation: response.explanation,
        features: response.features.map(|features| ArticleFeatures {
            title_length: features.title_length,
            word_count: features.word_count,
            text_length: features.text_length,
            source: features.source,
            has_sensational_title: features.has_sensational_title,
            title_has_caps: features.title_has_caps,
        }),
    }
}

fn map_error(err: ClassifyError) -> SubmissionError {
    match err.kind {
        FailureKind::HttpStatus { status, detail } => SubmissionError::Service { status, detail },
        kind => {
            nc_warn!("Transport failure ({}): {}", kind, err.message);
            SubmissionError::Transport {
                message: Some(err.message),
            }
        }
    }
}
