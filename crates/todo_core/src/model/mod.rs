//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the task record shared by store, view binding and FFI.
//!
//! # Invariants
//! - Every task is identified by a caller-supplied `TaskId`.
//! - Records are replaced as whole values; nothing mutates them in place
//!   outside the store.

pub mod task;
