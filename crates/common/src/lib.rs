//! Shared error plumbing used across all skillport crates.

pub mod error;

pub use error::FromMessage;
