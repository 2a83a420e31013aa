use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::config::Settings;

const MAX_TOKENS: u32 = 10;
const TEMPERATURE: f64 = 0.7;
const CHOICES: u32 = 1;
const STOP: &str = "\n";

/// Body of a legacy text-completion request.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub n: u32,
    pub stop: &'static str,
}

impl<'a> CompletionRequest<'a> {
    /// Builds a request with the fixed sampling parameters.
    pub const fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            n: CHOICES,
            stop: STOP,
        }
    }
}

pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `prompt` and returns the raw response body.
    ///
    /// The status code is not inspected: error responses come back as text
    /// just like successful ones.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&CompletionRequest::new(prompt))
            .send()
            .await
            .context("Error sending API request")?;

        response
            .text()
            .await
            .context("Error reading API response")
    }
}
