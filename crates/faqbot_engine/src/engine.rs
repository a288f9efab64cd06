use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::backend::{Backend, ReqwestBackend};
use crate::{BackendError, BackendSettings, EngineEvent, TimerId, UploadFile};

enum EngineCommand {
    ProbeHealth,
    Query {
        question: String,
    },
    Ingest {
        files: Vec<(String, PathBuf)>,
    },
    ScheduleTimer {
        id: TimerId,
        after: Duration,
        cancel_pending: bool,
    },
}

/// Runs backend calls and timers on a dedicated tokio runtime thread and
/// reports their completion as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let backend = ReqwestBackend::new(settings)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut pending_timer: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                let event_tx = event_tx.clone();
                match command {
                    EngineCommand::ScheduleTimer {
                        id,
                        after,
                        cancel_pending,
                    } => {
                        if cancel_pending {
                            if let Some(previous) = pending_timer.take() {
                                previous.cancel();
                            }
                        }
                        let token = CancellationToken::new();
                        pending_timer = Some(token.clone());
                        runtime.spawn(run_timer(id, after, token, event_tx));
                    }
                    command => {
                        let backend = backend.clone();
                        runtime.spawn(async move {
                            handle_command(backend.as_ref(), command, event_tx).await;
                        });
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn probe_health(&self) {
        self.send(EngineCommand::ProbeHealth);
    }

    pub fn query(&self, question: impl Into<String>) {
        self.send(EngineCommand::Query {
            question: question.into(),
        });
    }

    /// Reads every file and posts them as one ingest request.
    pub fn ingest(&self, files: Vec<(String, PathBuf)>) {
        self.send(EngineCommand::Ingest { files });
    }

    /// Reports [`EngineEvent::TimerElapsed`] after `after`. With `cancel_pending`
    /// the previously scheduled timer is cancelled first.
    pub fn schedule_timer(&self, id: TimerId, after: Duration, cancel_pending: bool) {
        self.send(EngineCommand::ScheduleTimer {
            id,
            after,
            cancel_pending,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine thread is gone; command dropped");
        }
    }
}

async fn run_timer(
    id: TimerId,
    after: Duration,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            engine_debug!("Timer {} cancelled", id);
        }
        _ = tokio::time::sleep(after) => {
            let _ = event_tx.send(EngineEvent::TimerElapsed { id });
        }
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::ProbeHealth => EngineEvent::HealthChecked {
            reachable: backend.health().await,
        },
        EngineCommand::Query { question } => {
            EngineEvent::QueryFinished(backend.query(&question).await)
        }
        EngineCommand::Ingest { files } => {
            let result = match read_files(files).await {
                Ok(files) => backend.ingest(files).await,
                Err(err) => Err(err),
            };
            EngineEvent::IngestFinished(result)
        }
        EngineCommand::ScheduleTimer { .. } => return,
    };
    let _ = event_tx.send(event);
}

async fn read_files(files: Vec<(String, PathBuf)>) -> Result<Vec<UploadFile>, BackendError> {
    let mut loaded = Vec::with_capacity(files.len());
    for (name, path) in files {
        loaded.push(UploadFile::read(name, &path).await?);
    }
    Ok(loaded)
}
