//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do record rendered by the list view.
//! - Provide copy helpers used by store mutations and the edit dialog.
//!
//! # Invariants
//! - `id` is unique among tasks held by one store (caller guarantees it).
//! - `due_date` is fixed at creation; no helper changes it.
//! - `photo_path` stays `None` until a photo is attached.

use serde::{Deserialize, Serialize};

/// Identifier of one task inside a store.
///
/// Supplied by an `IdGenerator`, never assigned by the store itself.
pub type TaskId = i64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Unix epoch milliseconds.
    pub due_date: i64,
    pub is_completed: bool,
    /// Reference to an image file owned by the photo collaborator.
    pub photo_path: Option<String>,
}

impl Task {
    /// Creates an open task without a photo.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date,
            is_completed: false,
            photo_path: None,
        }
    }

    /// Returns a copy with only title and description replaced.
    pub fn with_title_and_description(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..self.clone()
        }
    }

    /// Returns a copy flagged as completed.
    pub fn completed(&self) -> Self {
        Self {
            is_completed: true,
            ..self.clone()
        }
    }

    /// Returns a copy referencing the given photo.
    pub fn with_photo(&self, path: impl Into<String>) -> Self {
        Self {
            photo_path: Some(path.into()),
            ..self.clone()
        }
    }
}
