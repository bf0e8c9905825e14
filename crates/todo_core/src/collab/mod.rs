//! Contracts for collaborators that live outside the core.
//!
//! # Responsibility
//! - Describe notification delivery, photo capture, id generation and time
//!   as traits the view binding calls into.
//! - Ship small in-process implementations for hosts, the CLI and tests.
//!
//! # Invariants
//! - The core never observes delivery success or permission state.
//! - Collaborator results re-enter the core only through binding intents.

pub mod clock;
pub mod ids;
pub mod notifier;
pub mod photo;
