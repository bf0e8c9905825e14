//! In-memory task storage with synchronous change publication.
//!
//! # Responsibility
//! - Own the authoritative, ordered task sequence.
//! - Publish the full sequence to subscribers after every mutation.
//!
//! # See also
//! - `view::binding` for the subscriber that re-renders the list.

pub mod task_store;
