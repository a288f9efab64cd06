use std::time::Duration;

/// How long a notification stays visible after `show`.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// Decides what an elapsed expiry timer is allowed to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    /// Timers are never cancelled and any elapsed timer clears the current
    /// notification, even one shown after it was scheduled.
    #[default]
    FirstTimerWins,
    /// A timer only clears the notification it was scheduled for; replacing a
    /// notification cancels its predecessor's timer.
    Scoped,
}

/// Holds at most one live notification. `show` always replaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationQueue {
    current: Option<Notification>,
    last_id: NotificationId,
    policy: ExpiryPolicy,
}

impl NotificationQueue {
    pub fn new(policy: ExpiryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces the current notification and returns the id its expiry timer must carry.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.last_id += 1;
        self.current = Some(Notification {
            id: self.last_id,
            message: message.into(),
            kind,
        });
        self.last_id
    }

    /// Applies an elapsed timer. Returns whether anything was cleared.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let clears = match (&self.current, self.policy) {
            (None, _) => false,
            (Some(current), ExpiryPolicy::Scoped) => current.id == id,
            (Some(_), ExpiryPolicy::FirstTimerWins) => true,
        };
        if clears {
            self.current = None;
        }
        clears
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }
}
