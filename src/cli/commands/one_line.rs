use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use crate::completion::{CompletionClient, build_prompt};
use crate::config::{ConfigManager, Settings};
use crate::fs::write_buffered;
use crate::input::InputReader;
use crate::normalize::normalize;
use crate::ui::{Spinner, Style};

pub struct OneLineOptions {
    pub input_text: Option<PathBuf>,
    pub output_text: PathBuf,
}

/// Runs the `one_line` tool with settings from `.env`.
pub async fn run_one_line(options: OneLineOptions) -> Result<()> {
    run_one_line_with(options, &ConfigManager::new()).await
}

/// Flattens the input file, writes it out and asks the API for a summary.
///
/// The input path is checked before the settings file or any other file is
/// opened. Failures talking to the API are printed and swallowed.
pub async fn run_one_line_with(options: OneLineOptions, manager: &ConfigManager) -> Result<()> {
    let input_path = options
        .input_text
        .ok_or_else(|| anyhow!("The input_text command line argument is required"))?;

    let settings = manager.load_or_default();

    let text = flatten_file(&input_path, &options.output_text)?;

    summarize(&settings, &text).await;

    Ok(())
}

/// Reads `input`, normalizes it and writes the result to `output`.
pub fn flatten_file(input: &Path, output: &Path) -> Result<String> {
    let source = InputReader::read(input)?;
    let text = normalize(&source);

    write_buffered(output, &text)?;
    crate::status!(
        "{} {}",
        Style::success("Wrote"),
        Style::value(output.display())
    );

    Ok(text)
}

async fn summarize(settings: &Settings, text: &str) {
    if !settings.has_api_key() {
        crate::warn!(
            "{} no API key configured; the request will likely be rejected",
            Style::warning("Warning:")
        );
    }

    let client = CompletionClient::new(settings);
    let prompt = build_prompt(text);

    let spinner = Spinner::new("Summarizing...");
    let result = client.complete(&prompt).await;
    spinner.stop();

    match result {
        Ok(body) => println!("{body}"),
        Err(e) => crate::warn!("{e:#}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flatten_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Hello\n\tWorld   foo\n").unwrap();

        let text = flatten_file(&input, &output).unwrap();

        assert_eq!(text, "Hello World foo");
        assert_eq!(fs::read_to_string(&output).unwrap(), "Hello World foo");
    }

    #[test]
    fn test_flatten_file_latin1_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, b"caf\xe9\n\tau  lait").unwrap();

        let text = flatten_file(&input, &output).unwrap();

        assert_eq!(text, "caf\u{fffd} au lait");
        assert_eq!(fs::read_to_string(&output).unwrap(), text);
    }

    #[test]
    fn test_flatten_file_missing_input_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.txt");
        let output = temp_dir.path().join("out.txt");

        assert!(flatten_file(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_missing_input_text_is_rejected_before_io() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");
        let options = OneLineOptions {
            input_text: None,
            output_text: output.clone(),
        };
        let manager = ConfigManager::with_path(temp_dir.path().join(".env"));

        let err = run_one_line_with(options, &manager).await.unwrap_err();

        assert!(err.to_string().contains("input_text"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_api_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        let env_path = temp_dir.path().join(".env");
        fs::write(&input, "some  text").unwrap();
        // Empty URL: the request cannot even be built.
        fs::write(&env_path, "CHAT_GPT_API_KEY=k\n").unwrap();

        let options = OneLineOptions {
            input_text: Some(input),
            output_text: output.clone(),
        };
        run_one_line_with(options, &ConfigManager::with_path(&env_path))
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "some text");
    }
}
