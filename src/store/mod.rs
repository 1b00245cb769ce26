// scrollkeep storage layer
// The in-memory position store, its durable mirror trait, and the SQLite mirror.

pub mod mirror;
pub mod position_store;
pub mod sqlite_mirror;

pub use mirror::{MemoryMirror, SessionMirror};
pub use position_store::{PositionStore, PositionStoreTrait};
pub use sqlite_mirror::SqliteMirror;
