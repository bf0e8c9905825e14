//! Intent routing between the UI, the store and external collaborators.
//!
//! # Responsibility
//! - Subscribe the view sink to the store and re-render on every publish.
//! - Translate user intents into store mutations and notifications.
//! - Track the `{list} <-> {edit dialog for task X}` state.
//!
//! # Invariants
//! - Intents resolve tasks by id against the store at call time, never
//!   against an earlier rendered snapshot.
//! - Saving an edit overwrites only title and description; id, due date,
//!   completion and photo keep their current stored values.
//! - Cancelling an edit performs no mutation.

use crate::collab::clock::Clock;
use crate::collab::ids::IdGenerator;
use crate::collab::notifier::{Notifier, TaskNotification};
use crate::collab::photo::{CaptureOutcome, PhotoCapture};
use crate::config::{BindingConfig, ConfigError};
use crate::model::task::{Task, TaskId};
use crate::store::task_store::{SubscriptionId, TaskStore};
use crate::view::dialog::EditDialog;
use crate::view::render::render_task_list;
use crate::view::TaskListView;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Intent failures reported back to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Intent references a task the store no longer holds.
    TaskNotFound(TaskId),
    /// Dialog intent issued while the list view is showing.
    NoDialogOpen,
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::NoDialogOpen => write!(f, "no edit dialog is open"),
        }
    }
}

impl Error for ViewError {}

/// External collaborators used by the binding.
pub struct Collaborators<N, P, G, C> {
    pub notifier: N,
    pub photo: P,
    pub ids: G,
    pub clock: C,
}

/// Binds one `TaskStore` to one `TaskListView`.
pub struct ViewBinding<V, N, P, G, C> {
    store: TaskStore,
    view: Arc<V>,
    subscription: SubscriptionId,
    dialog: Option<EditDialog>,
    notifier: N,
    photo: P,
    ids: G,
    clock: C,
    config: BindingConfig,
}

impl<V, N, P, G, C> ViewBinding<V, N, P, G, C>
where
    V: TaskListView + 'static,
    N: Notifier,
    P: PhotoCapture,
    G: IdGenerator,
    C: Clock,
{
    /// Takes ownership of `store` and renders its current state into `view`.
    ///
    /// # Errors
    /// - `config` fails validation.
    pub fn new(
        mut store: TaskStore,
        view: Arc<V>,
        collaborators: Collaborators<N, P, G, C>,
        config: BindingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let sink = Arc::clone(&view);
        let subscription = store.subscribe(move |tasks| sink.show_list(&render_task_list(tasks)));

        Ok(Self {
            store,
            view,
            subscription,
            dialog: None,
            notifier: collaborators.notifier,
            photo: collaborators.photo,
            ids: collaborators.ids,
            clock: collaborators.clock,
            config,
        })
    }

    /// Read-only view of the current sequence.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn dialog(&self) -> Option<&EditDialog> {
        self.dialog.as_ref()
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Additional subscription to the owned store, e.g. for analytics hosts.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&[Task]) + Send + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Removes a subscription added through `subscribe`.
    ///
    /// The view's own subscription cannot be removed this way.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if id == self.subscription {
            return false;
        }
        self.store.unsubscribe(id)
    }

    /// Creates a task with default texts, due now, and announces it.
    pub fn add_task(&mut self) -> TaskId {
        let task = Task::new(
            self.ids.next_id(),
            self.config.new_task_title.clone(),
            self.config.new_task_description.clone(),
            self.clock.now_epoch_ms(),
        );
        let id = task.id;
        let notification = TaskNotification {
            title: self.config.notification_titles.added.clone(),
            message: task.title.clone(),
            id,
        };

        self.store.add(task);
        self.notifier.notify(&notification);
        id
    }

    /// Opens the edit dialog for the stored task `id`.
    pub fn request_edit(&mut self, id: TaskId) -> Result<(), ViewError> {
        let task = self.store.get(id).ok_or(ViewError::TaskNotFound(id))?;
        let dialog = EditDialog::open(task);
        debug!("event=edit_open module=view task_id={id}");
        self.view.show_edit_dialog(Some(&dialog));
        self.dialog = Some(dialog);
        Ok(())
    }

    pub fn edit_title(&mut self, title: impl Into<String>) -> Result<(), ViewError> {
        let dialog = self.dialog.as_mut().ok_or(ViewError::NoDialogOpen)?;
        dialog.set_title(title);
        self.view.show_edit_dialog(Some(&*dialog));
        Ok(())
    }

    pub fn edit_description(&mut self, description: impl Into<String>) -> Result<(), ViewError> {
        let dialog = self.dialog.as_mut().ok_or(ViewError::NoDialogOpen)?;
        dialog.set_description(description);
        self.view.show_edit_dialog(Some(&*dialog));
        Ok(())
    }

    /// Writes the draft back through `TaskStore::update` and closes the dialog.
    ///
    /// # Errors
    /// - `NoDialogOpen` when the list view is showing.
    /// - `TaskNotFound` when the task left the store; the dialog is closed and
    ///   nothing is published or announced.
    pub fn save_edit(&mut self) -> Result<(), ViewError> {
        let dialog = self.dialog.take().ok_or(ViewError::NoDialogOpen)?;
        self.view.show_edit_dialog(None);
        let Some(current) = self.store.get(dialog.task_id()) else {
            return Err(ViewError::TaskNotFound(dialog.task_id()));
        };
        let updated = dialog.apply_to(current);
        let notification = TaskNotification {
            title: self.config.notification_titles.edited.clone(),
            message: updated.title.clone(),
            id: updated.id,
        };

        self.store.update(updated);
        self.notifier.notify(&notification);
        debug!("event=edit_save module=view task_id={}", dialog.task_id());
        Ok(())
    }

    /// Closes the dialog without touching the store.
    pub fn cancel_edit(&mut self) -> Result<(), ViewError> {
        let dialog = self.dialog.take().ok_or(ViewError::NoDialogOpen)?;
        self.view.show_edit_dialog(None);
        debug!("event=edit_cancel module=view task_id={}", dialog.task_id());
        Ok(())
    }

    /// Removes task `id`; announces it only when it existed.
    pub fn delete_task(&mut self, id: TaskId) {
        let removed_title = self.store.get(id).map(|task| task.title.clone());
        self.store.remove(id);

        if self.dialog.as_ref().map(EditDialog::task_id) == Some(id) {
            self.dialog = None;
            self.view.show_edit_dialog(None);
        }

        if let Some(title) = removed_title {
            self.notifier.notify(&TaskNotification {
                title: self.config.notification_titles.deleted.clone(),
                message: title,
                id,
            });
        }
    }

    pub fn complete_task(&mut self, id: TaskId) {
        self.store.complete(id);
    }

    /// Asks the photo collaborator to capture an image for task `id`.
    pub fn request_photo(&mut self, id: TaskId) -> Result<(), ViewError> {
        if self.store.get(id).is_none() {
            return Err(ViewError::TaskNotFound(id));
        }
        self.photo.request_capture(id);
        Ok(())
    }

    /// Capture result callback from the photo collaborator.
    pub fn photo_captured(&mut self, id: TaskId, outcome: CaptureOutcome) {
        match outcome {
            CaptureOutcome::Stored(path) => self.store.attach_photo(id, path),
            CaptureOutcome::NoPhoto => {
                debug!("event=photo_captured module=view status=no_photo task_id={id}");
            }
        }
    }
}
