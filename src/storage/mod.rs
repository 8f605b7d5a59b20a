//! Implementations of the [`Storage`](crate::traits::Storage) trait

mod memory;
pub use memory::MemoryStorage;
mod file;
pub use file::FileStorage;
