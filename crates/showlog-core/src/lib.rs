//! Core types and trait definitions for the showlog event store.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies so
//! the merge and validation logic is testable on its own. Every other crate
//! in the workspace depends on it.

pub mod codec;
pub mod error;
pub mod event;
pub mod review;
pub mod store;

pub use error::{Error, Result};
