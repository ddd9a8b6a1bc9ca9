use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use newscheck_logging::{nc_info, nc_warn};
use thiserror::Error;

use crate::classify::{ClassifySettings, Classifier, ReqwestClassifier};
use crate::{EngineEvent, PredictionRequest, RequestId};

enum EngineCommand {
    Classify {
        request_id: RequestId,
        request: PredictionRequest,
    },
    CheckHealth,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

/// Runs service requests on a background tokio runtime.
///
/// Commands are accepted from any thread; completions come back as
/// [`EngineEvent`]s in the order they finish. The handle is `Sync`, so one
/// thread may drain events while another issues commands.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ClassifySettings) -> Result<Self, EngineError> {
        Self::with_classifier(Arc::new(ReqwestClassifier::new(settings)))
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("newscheck-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(classifier.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn classify(&self, request_id: RequestId, request: PredictionRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Classify {
            request_id,
            request,
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    classifier: &dyn Classifier,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Classify {
            request_id,
            request,
        } => {
            let result = classifier.classify(&request).await;
            match &result {
                Ok(response) => nc_info!(
                    "request {} classified as {:?} p={}",
                    request_id,
                    response.label,
                    response.probability
                ),
                Err(err) => nc_warn!("request {} failed: {}", request_id, err),
            }
            EngineEvent::PredictionCompleted { request_id, result }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            result: classifier.health().await,
        },
    };
    let _ = event_tx.send(event);
}
