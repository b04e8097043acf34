/// Bounded, position-indexed undo/redo history.
///
/// A single buffer with an integer cursor splits recorded history into an
/// undoable past and a redoable future. Entries are opaque to the manager;
/// callers conventionally store forward/inverse delta pairs ([`PatchPair`])
/// and apply the matching half when an entry comes back from `undo` or
/// `redo`. Undo/redo availability is exposed both as plain accessors and as
/// push-based, change-only boolean signals.
pub mod config;
pub mod manager;
pub mod modify;
pub mod patch;
pub mod signal;

pub use config::HistoryConfig;
pub use manager::UndoRedoManager;
pub use modify::ModifyOutcome;
pub use patch::PatchPair;
pub use signal::{Signal, SubscriptionId};
