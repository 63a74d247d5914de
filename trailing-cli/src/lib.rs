//! trailing CLI library
//!
//! This library provides the command-line interface that reports lines
//! ending with unwanted trailing characters.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
