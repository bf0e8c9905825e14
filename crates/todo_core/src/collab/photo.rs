//! Photo capture contract.

use crate::model::task::TaskId;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Result of one capture request, reported back by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Image was stored; the path is owned by the photo collaborator.
    Stored(String),
    /// User cancelled or capture failed.
    NoPhoto,
}

/// Starts a capture for one task. The outcome arrives later through
/// `ViewBinding::photo_captured`.
pub trait PhotoCapture: Send {
    fn request_capture(&self, task_id: TaskId);
}

/// Records capture requests for a host that polls for them.
#[derive(Debug, Clone, Default)]
pub struct QueuedPhotoCapture {
    pending: Arc<Mutex<VecDeque<TaskId>>>,
}

impl QueuedPhotoCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest pending request.
    pub fn next_request(&self) -> Option<TaskId> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

impl PhotoCapture for QueuedPhotoCapture {
    fn request_capture(&self, task_id: TaskId) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(task_id);
    }
}
