//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in [`crate::ports`].

pub mod in_memory_repository;
pub mod json_file_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;
