//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Tool implementations.
pub mod commands;

/// Tool selection.
pub mod tool;

pub use args::Args;
pub use tool::Tool;
