//! Task id generation.

use crate::model::task::TaskId;
use uuid::Uuid;

/// Supplies a fresh id for each new task.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> TaskId;
}

/// Derives ids from random UUIDs folded into 32 bits.
///
/// Collisions are possible but improbable; the store does not check them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        fold_uuid(Uuid::new_v4())
    }
}

/// Hands out `start, start + 1, ...`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: TaskId,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: TaskId) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn fold_uuid(uuid: Uuid) -> TaskId {
    let (high, low) = uuid.as_u64_pair();
    let mixed = high ^ low;
    TaskId::from(((mixed >> 32) ^ mixed) as u32 as i32)
}
