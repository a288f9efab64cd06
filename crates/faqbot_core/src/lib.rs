//! FAQ bot core: pure conversation state machine and view-model helpers.
mod conversation;
mod drop_zone;
mod effect;
mod health;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use conversation::{Conversation, Message, SourceRef, SOURCE_PLACEHOLDER};
pub use drop_zone::{DropZoneEvent, SelectedFile, ACCEPTED_EXTENSIONS};
pub use effect::Effect;
pub use health::HealthStatus;
pub use msg::{Msg, QueryOutcome, UploadOutcome};
pub use notification::{
    ExpiryPolicy, Notification, NotificationId, NotificationKind, NotificationQueue,
    NOTIFICATION_TTL,
};
pub use state::{AppState, CoreOptions};
pub use update::{
    update, QUERY_FAILED_MESSAGE, QUICK_QUESTIONS, UPLOAD_FAILED_MESSAGE,
    UPLOAD_TRANSPORT_FAILED_MESSAGE,
};
pub use view_model::{AppViewModel, MessageView};
