//! Edit dialog state.

use crate::model::task::{Task, TaskId};

/// Open edit dialog for one task with draft texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    task_id: TaskId,
    title: String,
    description: String,
}

impl EditDialog {
    /// Opens a dialog prefilled from `task`.
    pub fn open(task: &Task) -> Self {
        Self {
            task_id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Applies the draft texts to `current`; every other field comes from it.
    pub fn apply_to(&self, current: &Task) -> Task {
        current.with_title_and_description(self.title.clone(), self.description.clone())
    }
}
