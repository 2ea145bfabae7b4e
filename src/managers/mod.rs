// Pouch stateful managers
// Orchestration over the working copy: session state and undo-delete.

pub mod session;
pub mod undo_delete;
