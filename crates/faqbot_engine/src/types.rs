use std::fmt;

use serde::Deserialize;

pub type TimerId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    HealthChecked { reachable: bool },
    QueryFinished(Result<QueryReply, BackendError>),
    IngestFinished(Result<IngestReceipt, BackendError>),
    TimerElapsed { id: TimerId },
}

/// Body of a successful `POST /api/v1/query`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryReply {
    pub answer: String,
    /// Absent and `null` both decode to `None`.
    #[serde(default)]
    pub sources: Option<Vec<SourceEntry>>,
}

impl QueryReply {
    pub fn into_parts(self) -> (String, Vec<SourceEntry>) {
        (self.answer, self.sources.unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub document_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<SourceMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SourceMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub document_name: Option<String>,
}

impl SourceEntry {
    /// Label candidates in preference order.
    pub fn label_candidates(&self) -> [Option<&str>; 4] {
        let metadata = self.metadata.as_ref();
        [
            self.source.as_deref(),
            self.document_name.as_deref(),
            metadata.and_then(|m| m.source.as_deref()),
            metadata.and_then(|m| m.document_name.as_deref()),
        ]
    }
}

/// Body of a successful `POST /api/v1/ingest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IngestReceipt {
    pub documents_processed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the backend answered with a non-success status.
    pub fn is_application_error(&self) -> bool {
        matches!(self.kind, FailureKind::HttpStatus { .. })
    }

    /// Server-supplied `detail` string, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus { status: u16, detail: Option<String> },
    Timeout,
    Network,
    Decode,
    FileRead { name: String },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::FileRead { name } => write!(f, "could not read {name}"),
        }
    }
}
