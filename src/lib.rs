//! # textkit - Small text tools backed by a completion API
//!
//! `textkit` runs one tool per invocation, selected with `--tool`.
//!
//! ## Tools
//!
//! - **`one_line`**: flattens a text file onto a single line (newlines and
//!   tabs become spaces, whitespace runs collapse, ends are trimmed), writes
//!   the result to `--output_text`, then asks the configured completion
//!   endpoint for a summary and prints the raw response.
//!
//! ## Quick Start
//!
//! ```bash
//! textkit --tool one_line --input_text ./notes.txt
//! textkit --tool one_line --input_text ./notes.txt --output_text flat.txt
//! ```
//!
//! ## Configuration
//!
//! API settings are read from `.env` in the working directory:
//!
//! ```text
//! CHAT_GPT_API_KEY=sk-...
//! CHAT_GPT_API_URL=https://api.openai.com/v1/completions
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Text-completion client.
pub mod completion;

/// `.env` settings loading.
pub mod config;

/// Fatal-error reporting and exit codes.
pub mod fatal;

/// File system utilities.
pub mod fs;

/// Input file reading.
pub mod input;

/// Whitespace normalization.
pub mod normalize;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Terminal UI components (spinner, colors).
pub mod ui;
