//! In-process view sink that keeps the last rendered state.

use crate::view::dialog::EditDialog;
use crate::view::render::ListView;
use crate::view::TaskListView;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SnapshotState {
    list: ListView,
    dialog: Option<EditDialog>,
    renders: usize,
}

/// Holds the latest list and dialog for hosts that pull state.
#[derive(Debug, Default)]
pub struct SnapshotView {
    state: Mutex<SnapshotState>,
}

impl SnapshotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> ListView {
        self.lock().list.clone()
    }

    pub fn dialog(&self) -> Option<EditDialog> {
        self.lock().dialog.clone()
    }

    /// Number of list renders received so far.
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    fn lock(&self) -> MutexGuard<'_, SnapshotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskListView for SnapshotView {
    fn show_list(&self, list: &ListView) {
        let mut state = self.lock();
        state.list = list.clone();
        state.renders += 1;
    }

    fn show_edit_dialog(&self, dialog: Option<&EditDialog>) {
        self.lock().dialog = dialog.cloned();
    }
}
