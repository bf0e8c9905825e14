//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the list, edit, delete, complete and photo intents to Dart.
//! - Hand queued notifications and capture requests to the host, which owns
//!   delivery, permissions and the camera.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - All calls go through one process-global binding; the list returned by
//!   `tasks_list` is the last rendered publish.

use log::warn;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BindingConfig, CaptureOutcome, Collaborators, QueuedNotifier, QueuedPhotoCapture,
    SnapshotView, SystemClock, TaskId, TaskRow, TaskStore, UuidIdGenerator, ViewBinding,
    ViewError,
};

type AppBinding =
    ViewBinding<SnapshotView, QueuedNotifier, QueuedPhotoCapture, UuidIdGenerator, SystemClock>;

struct App {
    binding: AppBinding,
    view: Arc<SnapshotView>,
    notifier: QueuedNotifier,
    photo: QueuedPhotoCapture,
}

static APP: OnceCell<Mutex<App>> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Notification channel the host registers before posting notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannelInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// One rendered task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Unix epoch milliseconds.
    pub due_date: i64,
    pub is_completed: bool,
    pub photo_path: Option<String>,
}

/// Notification the host should post: `(title, message, id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNotificationItem {
    pub title: String,
    pub message: String,
    pub id: i64,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the intent was accepted.
    pub ok: bool,
    /// Task the intent applied to, when known.
    pub task_id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: false,
            task_id,
            message: message.into(),
        }
    }
}

/// Channel configured on the live binding.
#[flutter_rust_bridge::frb(sync)]
pub fn notification_channel() -> NotificationChannelInfo {
    let channel = match app() {
        Ok(app) => app.binding.config().channel.clone(),
        Err(message) => {
            warn!("event=notification_channel module=ffi status=error message={message}");
            BindingConfig::default().channel
        }
    };
    NotificationChannelInfo {
        id: channel.id,
        name: channel.name,
        description: channel.description,
    }
}

/// Returns the last rendered task list in store order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> Vec<TaskItem> {
    match app() {
        Ok(app) => app.view.list().rows.into_iter().map(to_task_item).collect(),
        Err(message) => {
            warn!("event=tasks_list module=ffi status=error message={message}");
            Vec::new()
        }
    }
}

/// Adds a task with default texts; the new id is returned in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add() -> TaskActionResponse {
    match app() {
        Ok(mut app) => {
            let id = app.binding.add_task();
            TaskActionResponse::success("Task added.", Some(id))
        }
        Err(message) => TaskActionResponse::failure(message, None),
    }
}

/// Opens the edit dialog for `task_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit_begin(task_id: i64) -> TaskActionResponse {
    with_binding(task_id, "task_edit_begin", |binding| {
        binding.request_edit(task_id)
    })
}

/// Confirms the open dialog with the given texts.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit_save(title: String, description: String) -> TaskActionResponse {
    let mut app = match app() {
        Ok(app) => app,
        Err(message) => return TaskActionResponse::failure(message, None),
    };
    let task_id = app.binding.dialog().map(|dialog| dialog.task_id());
    let result = app
        .binding
        .edit_title(title)
        .and_then(|()| app.binding.edit_description(description))
        .and_then(|()| app.binding.save_edit());
    respond(result, task_id, "task_edit_save", "Task updated.")
}

/// Closes the open dialog without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit_cancel() -> TaskActionResponse {
    let mut app = match app() {
        Ok(app) => app,
        Err(message) => return TaskActionResponse::failure(message, None),
    };
    let task_id = app.binding.dialog().map(|dialog| dialog.task_id());
    let result = app.binding.cancel_edit();
    respond(result, task_id, "task_edit_cancel", "Edit cancelled.")
}

/// Removes `task_id`; unknown ids are accepted as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: i64) -> TaskActionResponse {
    with_binding(task_id, "task_delete", |binding| {
        binding.delete_task(task_id);
        Ok(())
    })
}

/// Marks `task_id` completed; unknown ids are accepted as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn task_complete(task_id: i64) -> TaskActionResponse {
    with_binding(task_id, "task_complete", |binding| {
        binding.complete_task(task_id);
        Ok(())
    })
}

/// Queues a capture request for `task_id`; see `task_photo_pending`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_photo_request(task_id: i64) -> TaskActionResponse {
    with_binding(task_id, "task_photo_request", |binding| {
        binding.request_photo(task_id)
    })
}

/// Takes the oldest capture request the host has not started yet.
#[flutter_rust_bridge::frb(sync)]
pub fn task_photo_pending() -> Option<i64> {
    app().ok().and_then(|app| app.photo.next_request())
}

/// Reports a capture result; `None` means no photo was taken.
#[flutter_rust_bridge::frb(sync)]
pub fn task_photo_result(task_id: i64, photo_path: Option<String>) -> TaskActionResponse {
    let outcome = match photo_path.map(|path| path.trim().to_string()) {
        Some(path) if !path.is_empty() => CaptureOutcome::Stored(path),
        _ => CaptureOutcome::NoPhoto,
    };
    with_binding(task_id, "task_photo_result", |binding| {
        binding.photo_captured(task_id, outcome);
        Ok(())
    })
}

/// Returns pending notifications in emission order and clears the queue.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications_drain() -> Vec<TaskNotificationItem> {
    match app() {
        Ok(app) => app
            .notifier
            .drain()
            .into_iter()
            .map(|notification| TaskNotificationItem {
                title: notification.title,
                message: notification.message,
                id: notification.id,
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn app() -> Result<MutexGuard<'static, App>, String> {
    let app = APP.get_or_try_init(|| {
        let view = Arc::new(SnapshotView::new());
        let notifier = QueuedNotifier::new();
        let photo = QueuedPhotoCapture::new();
        let binding = ViewBinding::new(
            TaskStore::new(),
            Arc::clone(&view),
            Collaborators {
                notifier: notifier.clone(),
                photo: photo.clone(),
                ids: UuidIdGenerator,
                clock: SystemClock,
            },
            BindingConfig::default(),
        )
        .map_err(|err| format!("binding init failed: {err}"))?;
        Ok::<_, String>(Mutex::new(App {
            binding,
            view,
            notifier,
            photo,
        }))
    })?;
    Ok(app.lock().unwrap_or_else(PoisonError::into_inner))
}

fn with_binding(
    task_id: TaskId,
    operation: &str,
    f: impl FnOnce(&mut AppBinding) -> Result<(), ViewError>,
) -> TaskActionResponse {
    match app() {
        Ok(mut app) => respond(f(&mut app.binding), Some(task_id), operation, "OK."),
        Err(message) => TaskActionResponse::failure(message, Some(task_id)),
    }
}

fn respond(
    result: Result<(), ViewError>,
    task_id: Option<TaskId>,
    operation: &str,
    ok_message: &str,
) -> TaskActionResponse {
    match result {
        Ok(()) => TaskActionResponse::success(ok_message, task_id),
        Err(err) => TaskActionResponse::failure(format!("{operation} failed: {err}"), task_id),
    }
}

fn to_task_item(row: TaskRow) -> TaskItem {
    TaskItem {
        id: row.id,
        title: row.title,
        description: row.description,
        due_date: row.due_date,
        is_completed: row.is_completed,
        photo_path: row.photo_path,
    }
}
