use std::sync::Mutex;

use async_trait::async_trait;
use keluh_core::ids::CategoryId;


/// How the user answered a deletion prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfirmationOutcome {
    Confirmed,

    /// The user explicitly said no.
    Cancelled,

    /// The prompt was closed without an answer.
    Dismissed,
}

impl ConfirmationOutcome {
    pub fn is_confirmed(self) -> bool {
        self == Self::Confirmed
    }
}


/// Asks the user whether a category should really be deleted.
///
/// The store awaits the answer before sending anything to the server.
#[async_trait]
pub trait ConfirmDeletion: Send + Sync {
    async fn confirm_deletion(
        &self,
        category_id: CategoryId,
        category_name: Option<&str>,
    ) -> ConfirmationOutcome;
}

/// A fixed answer, for non-interactive callers (`--yes`) and tests.
#[async_trait]
impl ConfirmDeletion for ConfirmationOutcome {
    async fn confirm_deletion(
        &self,
        _category_id: CategoryId,
        _category_name: Option<&str>,
    ) -> ConfirmationOutcome {
        *self
    }
}



#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A short user-visible message about the outcome of a store operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}


/// Presents notifications to the user (toasts, status lines, stderr, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}


/// Keeps every notification in memory, oldest first.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        match self.notifications.lock() {
            Ok(notifications) => notifications.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        match self.notifications.lock() {
            Ok(mut notifications) => notifications.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
