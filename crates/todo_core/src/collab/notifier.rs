//! Task change notifications.

use crate::model::task::TaskId;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Platform channel the host registers before delivering notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self {
            id: "task_channel".to_string(),
            name: "Task Notifications".to_string(),
            description: "Notifications for task updates".to_string(),
        }
    }
}

/// One notification request: `(title, message, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNotification {
    pub title: String,
    pub message: String,
    /// Task id, reused by the host as notification id.
    pub id: TaskId,
}

/// Best-effort notification delivery.
///
/// Fire-and-forget: implementations swallow their own failures.
pub trait Notifier: Send {
    fn notify(&self, notification: &TaskNotification);
}

/// Writes notifications to the core log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &TaskNotification) {
        info!(
            "event=notify module=notifier task_id={} title_len={} message_len={}",
            notification.id,
            notification.title.chars().count(),
            notification.message.chars().count()
        );
    }
}

/// Collects notifications until the host drains them.
///
/// Clones share one queue.
#[derive(Debug, Clone, Default)]
pub struct QueuedNotifier {
    queue: Arc<Mutex<Vec<TaskNotification>>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns queued notifications in emission order and empties the queue.
    pub fn drain(&self) -> Vec<TaskNotification> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Notifier for QueuedNotifier {
    fn notify(&self, notification: &TaskNotification) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}
