//! Pure task-list rendering.

use crate::model::task::{Task, TaskId};
use serde::Serialize;

/// One rendered list entry. Edit and delete actions target `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub due_date: i64,
    pub is_completed: bool,
    pub photo_path: Option<String>,
}

/// Rendered list in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

/// Renders `tasks` one row per task, preserving order.
pub fn render_task_list(tasks: &[Task]) -> ListView {
    ListView {
        rows: tasks.iter().map(render_row).collect(),
    }
}

fn render_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        due_date: task.due_date,
        is_completed: task.is_completed,
        photo_path: task.photo_path.clone(),
    }
}
