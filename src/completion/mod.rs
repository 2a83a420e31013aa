mod client;
mod prompt;

pub use client::{CompletionClient, CompletionRequest};
pub use prompt::{SUMMARY_INSTRUCTION, build_prompt};
