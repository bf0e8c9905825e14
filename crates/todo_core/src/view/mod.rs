//! View binding between the task store and a declarative UI.
//!
//! # Responsibility
//! - Turn each published task sequence into a list view description.
//! - Route user intents to store mutations and external collaborators.
//!
//! # Invariants
//! - The rendered list mirrors the published order; no sorting or filtering.
//! - The view never mutates the store directly.

pub mod binding;
pub mod dialog;
pub mod render;
pub mod snapshot;

use crate::view::dialog::EditDialog;
use crate::view::render::ListView;

/// UI surface driven by `ViewBinding`.
///
/// Called from inside store publication, so implementations must not call
/// back into the binding.
pub trait TaskListView: Send + Sync {
    fn show_list(&self, list: &ListView);
    /// `None` closes the dialog.
    fn show_edit_dialog(&self, dialog: Option<&EditDialog>);
}
