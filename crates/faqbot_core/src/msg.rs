use crate::{NotificationId, SelectedFile, SourceRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the question input box.
    InputChanged(String),
    /// User picked one of the canned questions; it replaces the input.
    QuickQuestionPicked(String),
    /// User submitted a question.
    SubmitQuestion(String),
    /// Backend settled the in-flight query.
    QueryCompleted(QueryOutcome),
    /// Files chosen through the picker, or forwarded by any other source.
    UploadFiles(Vec<SelectedFile>),
    /// Files dropped onto the upload zone; also ends the hover state.
    DropCompleted(Vec<SelectedFile>),
    /// Backend settled an ingest request.
    UploadCompleted(UploadOutcome),
    /// Start (or restart) the reachability probe.
    ProbeHealth,
    /// Reachability probe settled.
    HealthChecked { reachable: bool },
    /// Expiry timer for a notification elapsed.
    NotificationExpired { id: NotificationId },
    /// User closed the notification.
    DismissNotification,
    /// Pointer entered or left the upload zone.
    DragHoverChanged(bool),
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Answered {
        answer: String,
        sources: Vec<SourceRef>,
    },
    /// Non-success status or transport failure. Diagnostics are logged by the caller.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Processed { documents: u64 },
    /// Backend answered with a non-success status, optionally naming why.
    Rejected { detail: Option<String> },
    TransportFailed,
}
