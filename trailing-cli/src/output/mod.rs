//! Report output module

pub mod text;

pub use text::TextReporter;
