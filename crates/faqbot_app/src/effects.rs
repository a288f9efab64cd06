use std::time::Duration;

use engine_logging::{engine_error, engine_info, engine_warn};
use faqbot_core::{Effect, Msg, QueryOutcome, SourceRef, UploadOutcome};
use faqbot_engine::{EngineEvent, EngineHandle, SourceEntry};

/// Executes core effects on the engine and maps engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProbeHealth => {
                    engine_info!("ProbeHealth");
                    self.engine.probe_health();
                }
                Effect::SendQuery { question } => {
                    engine_info!("SendQuery question_len={}", question.len());
                    self.engine.query(question);
                }
                Effect::UploadFiles { files } => {
                    engine_info!("UploadFiles count={}", files.len());
                    self.engine.ingest(
                        files
                            .into_iter()
                            .map(|file| (file.name, file.path))
                            .collect(),
                    );
                }
                Effect::ScheduleNotificationExpiry {
                    id,
                    after,
                    cancel_pending,
                } => {
                    self.engine.schedule_timer(id, after, cancel_pending);
                }
            }
        }
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(translate_event)
    }

    pub fn next_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(translate_event)
    }
}

/// Maps an engine event to the core message. Failure details end up in the log only.
pub fn translate_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::HealthChecked { reachable } => {
            if !reachable {
                engine_warn!("Health probe failed; backend unreachable");
            }
            Msg::HealthChecked { reachable }
        }
        EngineEvent::QueryFinished(Ok(reply)) => {
            let (answer, sources) = reply.into_parts();
            Msg::QueryCompleted(QueryOutcome::Answered {
                answer,
                sources: sources.iter().map(source_ref).collect(),
            })
        }
        EngineEvent::QueryFinished(Err(err)) => {
            engine_error!("Query error: {}", err);
            Msg::QueryCompleted(QueryOutcome::Failed)
        }
        EngineEvent::IngestFinished(Ok(receipt)) => {
            engine_info!("Ingest processed {} document(s)", receipt.documents_processed);
            Msg::UploadCompleted(UploadOutcome::Processed {
                documents: receipt.documents_processed,
            })
        }
        EngineEvent::IngestFinished(Err(err)) => {
            engine_error!("Upload error: {}", err);
            let outcome = if err.is_application_error() {
                UploadOutcome::Rejected {
                    detail: err.detail().map(ToOwned::to_owned),
                }
            } else {
                UploadOutcome::TransportFailed
            };
            Msg::UploadCompleted(outcome)
        }
        EngineEvent::TimerElapsed { id } => Msg::NotificationExpired { id },
    }
}

fn source_ref(entry: &SourceEntry) -> SourceRef {
    SourceRef::from_candidates(entry.label_candidates())
}
