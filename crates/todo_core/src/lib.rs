//! Core logic for the to-do list app.
//! This crate owns the task sequence and every rule about how it changes.

pub mod collab;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use collab::clock::{Clock, FixedClock, SystemClock};
pub use collab::ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use collab::notifier::{
    LogNotifier, NotificationChannel, Notifier, QueuedNotifier, TaskNotification,
};
pub use collab::photo::{CaptureOutcome, PhotoCapture, QueuedPhotoCapture};
pub use config::{BindingConfig, ConfigError, NotificationTitles, RuntimeConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskId};
pub use store::task_store::{SubscriptionId, TaskStore};
pub use view::binding::{Collaborators, ViewBinding, ViewError};
pub use view::dialog::EditDialog;
pub use view::render::{render_task_list, ListView, TaskRow};
pub use view::snapshot::SnapshotView;
pub use view::TaskListView;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
