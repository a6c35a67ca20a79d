//! # schemalike
//!
//! Infers a lightweight, JSON-schema-like description of the shape an
//! in-memory value would have once serialized, without a hand-authored schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemalike::{impl_record, infer, Result};
//!
//! pub struct Person {
//!     pub name: String,
//!     pub age: i32,
//!     pub nicknames: Vec<String>,
//! }
//!
//! impl_record!(Person {
//!     pub name: String,
//!     pub age: i32,
//!     pub nicknames: Vec<String>,
//! });
//!
//! fn main() -> Result<()> {
//!     let person = Person { name: "Alice".into(), age: 30, nicknames: vec![] };
//!     let schema = infer(&person)?;
//!
//!     assert_eq!(
//!         schema.to_json(),
//!         serde_json::json!({"name": "String", "age": "i32", "nicknames": "[String]"})
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │               infer(&dyn Reflect) -> SchemaNode                │
//! └────────────────────────────────────────────────────────────────┘
//!                                 │
//!                        Category Dispatcher
//!                                 │
//! ┌──────────┬─────────────┬──────┴──────┬────────────┬────────────┐
//! │  Record  │  Reference  │ Polymorphic │    List    │    Map     │
//! ├──────────┼─────────────┼─────────────┼────────────┼────────────┤
//! │ pub only │ transparent │ unwrap held │ per item   │ text keys  │
//! │ rename   │ absent ->   │ value       │ empty ->   │            │
//! │ date-time│ static type │             │ "[T]"      │            │
//! └──────────┴─────────────┴─────────────┴────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime type description
pub mod reflect;

/// Schema nodes and the inference engine
pub mod schema;

/// Inference configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{load_config, load_config_from_str, InferConfig};
pub use reflect::{Reflect, Typed};
pub use schema::{infer, SchemaInferrer, SchemaNode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
