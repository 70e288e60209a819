//! Draft store adapters

pub mod file;
pub mod memory;

pub use file::FileDraftStore;
pub use memory::InMemoryDraftStore;
