//! Schema inference module
//!
//! Derives a lightweight, JSON-compatible shape description from a reflected
//! value.
//!
//! # Features
//!
//! - **Records**: public fields only, with optional `rename` metadata
//! - **References**: transparent when present, static fallback when absent
//! - **Polymorphic values**: unwrapped to the concrete held value
//! - **Collections**: one node per element, `"[T]"` placeholder when empty
//! - **Maps**: keys coerced to text
//! - **Timestamps**: reported as `"date-time"`

mod inference;
mod naming;
mod types;

pub use inference::{infer, is_temporal, SchemaInferrer, DEFAULT_MAX_DEPTH};
pub use naming::parse_rename;
pub use types::{SchemaNode, DATE_TIME_LABEL};
