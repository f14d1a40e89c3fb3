pub mod memory;
pub mod pagination;

pub use memory::{log_memory_usage, MemorySnapshot};
pub use pagination::{paginate, Page};
