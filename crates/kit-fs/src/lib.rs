//! Storage abstraction for the prototype kit extension system.
//!
//! The extension system reads a handful of small JSON files from a host
//! project. This crate puts that access behind the [`Storage`] trait so the
//! rest of the workspace never touches `std::fs` directly: production code
//! runs on [`OsStorage`], tests and embedded hosts on [`MemoryStorage`].

pub mod error;
pub mod memory;
pub mod storage;

pub use error::{Error, Result};
pub use memory::MemoryStorage;
pub use storage::{OsStorage, Storage};
