//! Persistence adapters for the document-store ports.

mod memory;

pub use memory::MemoryStore;
