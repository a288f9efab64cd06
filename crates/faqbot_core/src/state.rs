use crate::view_model::{AppViewModel, MessageView};
use crate::{
    Conversation, ExpiryPolicy, HealthStatus, Message, NotificationId, NotificationKind,
    NotificationQueue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreOptions {
    pub expiry_policy: ExpiryPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    conversation: Conversation,
    input: String,
    /// Shared by queries and uploads; whichever settles first clears it.
    busy: bool,
    health: HealthStatus,
    notifications: NotificationQueue,
    drag_hover: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CoreOptions) -> Self {
        Self {
            notifications: NotificationQueue::new(options.expiry_policy),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self.conversation.messages().iter().map(MessageView::from).collect(),
            show_empty_state: self.conversation.is_empty(),
            input: self.input.clone(),
            can_submit: !self.busy && !self.input.trim().is_empty(),
            busy: self.busy,
            health: self.health,
            health_label: self.health.label(),
            notification: self.notifications.current().cloned(),
            drag_hover: self.drag_hover,
            dirty: self.dirty,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn append(&mut self, message: Message) {
        self.conversation.append(message);
        self.dirty = true;
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        if self.busy != busy {
            self.busy = busy;
            self.dirty = true;
        }
    }

    pub(crate) fn set_health(&mut self, health: HealthStatus) {
        if self.health != health {
            self.health = health;
            self.dirty = true;
        }
    }

    pub(crate) fn set_drag_hover(&mut self, hover: bool) {
        if self.drag_hover != hover {
            self.drag_hover = hover;
            self.dirty = true;
        }
    }

    pub(crate) fn show_notification(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        self.dirty = true;
        self.notifications.show(message, kind)
    }

    pub(crate) fn expire_notification(&mut self, id: NotificationId) {
        if self.notifications.expire(id) {
            self.dirty = true;
        }
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notifications.dismiss() {
            self.dirty = true;
        }
    }
}
