use crate::{HealthStatus, Message, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub messages: Vec<MessageView>,
    /// No turn has happened yet.
    pub show_empty_state: bool,
    pub input: String,
    pub can_submit: bool,
    /// Disables input and shows the typing indicator.
    pub busy: bool,
    pub health: HealthStatus,
    pub health_label: &'static str,
    pub notification: Option<Notification>,
    pub drag_hover: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub from_user: bool,
    pub content: String,
    pub source_labels: Vec<String>,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            from_user: message.is_user(),
            content: message.content().to_string(),
            source_labels: message
                .sources()
                .iter()
                .map(|source| source.label.clone())
                .collect(),
        }
    }
}
