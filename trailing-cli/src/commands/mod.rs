//! CLI command implementations

pub mod check;

pub use check::{CheckArgs, RunSummary};
