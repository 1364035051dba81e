//! Workspace project registries.

mod json;
mod memory;

pub use json::JsonWorkspace;
pub use memory::MemoryWorkspace;
