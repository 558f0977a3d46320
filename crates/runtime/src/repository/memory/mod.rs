//! In-memory repository implementations for testing and development.

mod table;

pub use table::MemoryTableStorage;
