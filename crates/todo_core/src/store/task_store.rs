//! Observable task store.
//!
//! # Responsibility
//! - Keep tasks in insertion order; edits and photo attachment never reorder.
//! - Be the single point of mutation for the task sequence.
//!
//! # Invariants
//! - Every mutating call publishes the complete current sequence exactly
//!   once to each active subscriber, in subscription order, before returning.
//! - Calls targeting an unknown id are no-ops that still publish.
//! - A new subscriber receives the current sequence immediately.
//! - `add` does not check for duplicate ids; callers own id uniqueness.
//!   Id-based mutations apply to every task carrying that id.

use crate::model::task::{Task, TaskId};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Callback invoked with the full task sequence after each publish.
pub type TaskSubscriber = Box<dyn FnMut(&[Task]) + Send + 'static>;

/// Handle returned by `TaskStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Authoritative in-memory task sequence.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    subscribers: Vec<(SubscriptionId, TaskSubscriber)>,
    next_subscription: u64,
}

impl Debug for TaskStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `tasks`, kept in the given order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Registers `callback` and delivers the current sequence to it.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&[Task]) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut callback: TaskSubscriber = Box::new(callback);
        callback(&self.tasks);
        self.subscribers.push((id, callback));

        debug!(
            "event=subscribe module=store status=ok subscription={} subscribers={}",
            id.0,
            self.subscribers.len()
        );
        id
    }

    /// Removes a subscriber. Returns `false` when the handle is not active.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(active, _)| *active != id);
        let removed = self.subscribers.len() != before;
        debug!(
            "event=unsubscribe module=store status={} subscription={}",
            if removed { "ok" } else { "unknown" },
            id.0
        );
        removed
    }

    /// Appends `task` to the end of the sequence.
    pub fn add(&mut self, task: Task) {
        debug!("event=task_add module=store task_id={}", task.id);
        self.tasks.push(task);
        self.publish();
    }

    /// Replaces every task with the same id, keeping positions.
    pub fn update(&mut self, task: Task) {
        let id = task.id;
        self.replace_with(id, "task_update", |_| task.clone());
    }

    /// Removes every task with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = before - self.tasks.len();
        debug!(
            "event=task_remove module=store status={} task_id={id} removed={removed}",
            if removed > 0 { "ok" } else { "not_found" }
        );
        self.publish();
    }

    /// Flags every task with `id` as completed.
    pub fn complete(&mut self, id: TaskId) {
        self.replace_with(id, "task_complete", Task::completed);
    }

    /// Sets the photo reference of every task with `id`.
    pub fn attach_photo(&mut self, id: TaskId, path: impl Into<String>) {
        let path = path.into();
        self.replace_with(id, "task_attach_photo", |task| task.with_photo(path.as_str()));
    }

    // Ids are not unique by construction, so all matches are rewritten.
    fn replace_with(&mut self, id: TaskId, event: &str, f: impl Fn(&Task) -> Task) {
        let mut replaced = 0_usize;
        for slot in self.tasks.iter_mut().filter(|task| task.id == id) {
            *slot = f(slot);
            replaced += 1;
        }
        debug!(
            "event={event} module=store status={} task_id={id} replaced={replaced}",
            if replaced > 0 { "ok" } else { "not_found" }
        );
        self.publish();
    }

    fn publish(&mut self) {
        let tasks = &self.tasks;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(tasks);
        }
    }
}
