//! # squill-core
//!
//! Shared building blocks for the squill SQL serializers:
//!
//! - [`Value`]: the closed set of database storage values that travel as
//!   bind parameters alongside serialized SQL text.
//! - [`ToValue`]: conversions from common Rust types into [`Value`].
//! - [`Dialect`]: dialect-specific lexical policy (identifier quoting,
//!   placeholder tokens, feature support flags).
//!
//! This crate contains no SQL syntax of its own; statement ASTs and their
//! serializers live in the dialect crates that depend on it.

pub mod dialect;
pub mod value;

pub use dialect::Dialect;
pub use value::{ToValue, Value};
