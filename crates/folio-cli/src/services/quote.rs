use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::time::Duration;

/// Blocking client for the quote endpoint.
pub struct QuoteClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl QuoteClient {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch one random quote and reduce the response to display text.
    pub fn fetch_random(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {}", status);
        }

        let body: Value = response
            .json()
            .context("Failed to parse response as JSON")?;

        Ok(extract_quote_text(&body))
    }
}

/// Quote text from a response body. APIs differ on the field name, so
/// try `content`, then `fact`, then fall back to the raw JSON.
fn extract_quote_text(body: &Value) -> String {
    if let Some(content) = body["content"].as_str() {
        return content.to_string();
    }
    if let Some(fact) = body["fact"].as_str() {
        return fact.to_string();
    }
    body.to_string()
}
