pub mod file_store;
pub mod memory_store;
pub mod registry;
pub mod store;
