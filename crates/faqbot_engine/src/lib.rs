//! FAQ bot engine: backend HTTP client and effect execution.
mod backend;
mod engine;
mod settings;
mod types;
mod upload;

pub use backend::{Backend, ReqwestBackend};
pub use engine::EngineHandle;
pub use settings::{BackendSettings, DEFAULT_BASE_URL};
pub use types::{
    BackendError, EngineEvent, FailureKind, IngestReceipt, QueryReply, SourceEntry, TimerId,
};
pub use upload::{
    build_ingest_form, mime_for, UploadFile, INGEST_JURISDICTION, INGEST_POLICY_NAME,
    INGEST_VERSION,
};
