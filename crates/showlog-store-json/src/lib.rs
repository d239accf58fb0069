//! JSON-file backend for the showlog event store.
//!
//! The whole collection lives in one pretty-printed JSON array so the data
//! file stays inspectable (and hand-editable) by its users. Every mutation
//! rewrites the file before it returns; the in-memory copy is only updated
//! once the write has succeeded.

mod store;

pub use store::JsonStore;
