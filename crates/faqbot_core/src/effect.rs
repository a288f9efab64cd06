use std::time::Duration;

use crate::{NotificationId, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ProbeHealth,
    SendQuery {
        question: String,
    },
    UploadFiles {
        files: Vec<SelectedFile>,
    },
    ScheduleNotificationExpiry {
        id: NotificationId,
        after: Duration,
        /// Cancel any expiry timer still pending for an earlier notification.
        cancel_pending: bool,
    },
}
