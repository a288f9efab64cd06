use crate::{
    AppState, Effect, ExpiryPolicy, HealthStatus, Message, Msg, NotificationKind, QueryOutcome,
    SelectedFile, UploadOutcome, NOTIFICATION_TTL,
};

pub const QUERY_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";
pub const UPLOAD_TRANSPORT_FAILED_MESSAGE: &str = "Failed to upload documents";

pub const QUICK_QUESTIONS: [&str; 3] = [
    "What is AML?",
    "KYC requirements?",
    "Suspicious activity reporting?",
];

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) | Msg::QuickQuestionPicked(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitQuestion(question) => {
            // Single-flight: a submission while busy is dropped, not queued.
            if question.trim().is_empty() || state.is_busy() {
                return (state, Vec::new());
            }
            state.append(Message::User {
                content: question.clone(),
            });
            state.set_input(String::new());
            state.set_busy(true);
            vec![Effect::SendQuery { question }]
        }
        Msg::QueryCompleted(outcome) => {
            state.set_busy(false);
            match outcome {
                QueryOutcome::Answered { answer, sources } => {
                    state.append(Message::Assistant {
                        content: answer,
                        sources,
                    });
                    Vec::new()
                }
                QueryOutcome::Failed => {
                    vec![notify(&mut state, QUERY_FAILED_MESSAGE, NotificationKind::Error)]
                }
            }
        }
        Msg::UploadFiles(files) => start_upload(&mut state, files),
        Msg::DropCompleted(files) => {
            state.set_drag_hover(false);
            start_upload(&mut state, files)
        }
        Msg::UploadCompleted(outcome) => {
            state.set_busy(false);
            let effect = match outcome {
                UploadOutcome::Processed { documents } => notify(
                    &mut state,
                    format!("Successfully uploaded {documents} document(s)!"),
                    NotificationKind::Success,
                ),
                UploadOutcome::Rejected { detail } => {
                    let message = detail
                        .filter(|detail| !detail.is_empty())
                        .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string());
                    notify(&mut state, message, NotificationKind::Error)
                }
                UploadOutcome::TransportFailed => notify(
                    &mut state,
                    UPLOAD_TRANSPORT_FAILED_MESSAGE,
                    NotificationKind::Error,
                ),
            };
            vec![effect]
        }
        Msg::ProbeHealth => {
            state.set_health(HealthStatus::Loading);
            vec![Effect::ProbeHealth]
        }
        Msg::HealthChecked { reachable } => {
            state.set_health(HealthStatus::from_probe(reachable));
            Vec::new()
        }
        Msg::NotificationExpired { id } => {
            state.expire_notification(id);
            Vec::new()
        }
        Msg::DismissNotification => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::DragHoverChanged(hover) => {
            state.set_drag_hover(hover);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_upload(state: &mut AppState, files: Vec<SelectedFile>) -> Vec<Effect> {
    if files.is_empty() {
        return Vec::new();
    }
    state.set_busy(true);
    vec![Effect::UploadFiles { files }]
}

fn notify(state: &mut AppState, message: impl Into<String>, kind: NotificationKind) -> Effect {
    let id = state.show_notification(message, kind);
    Effect::ScheduleNotificationExpiry {
        id,
        after: NOTIFICATION_TTL,
        cancel_pending: state.notifications().policy() == ExpiryPolicy::Scoped,
    }
}
