pub const SUMMARY_INSTRUCTION: &str =
    "Summarize the following content in a way that a 12 year old would understand.";

/// Wraps the normalized text in the summary instruction.
pub fn build_prompt(text: &str) -> String {
    format!("{SUMMARY_INSTRUCTION} {text}\n")
}
