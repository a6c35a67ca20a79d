//! CLI module
//!
//! Command-line interface for inferring the shape of JSON and YAML documents.
//!
//! # Commands
//!
//! - `infer` - Print the inferred schema of a document
//! - `config` - Print the effective inference configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
