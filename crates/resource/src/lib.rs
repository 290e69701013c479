//! Document sinks for the simplepdf engine.
//!
//! This crate provides platform-specific implementations of the
//! `DocumentSink` trait from simplepdf-traits.
//!
//! ## Available Sinks
//!
//! - [`FilesystemSink`]: Writes documents into a directory on the local filesystem
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory sink from simplepdf-traits:
//! - [`InMemorySink`]: Keeps every document in memory

mod filesystem;

pub use filesystem::FilesystemSink;

pub use simplepdf_traits::InMemorySink;
