//! Tool implementations.

/// The `one_line` tool.
pub mod one_line;
