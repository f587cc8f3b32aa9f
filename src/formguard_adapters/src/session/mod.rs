pub mod dashmap_session_store;
pub mod memory_session;

pub use dashmap_session_store::DashMapSessionStore;
pub use memory_session::MemorySession;
