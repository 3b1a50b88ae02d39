use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};

use super::base::{CompletionProvider, ImageProvider};
use super::configs::azure::{AzureCompletionConfig, AzureImageConfig};
use super::configs::base::ProviderConfig;
use super::utils::{api_error_detail, messages_to_chat_spec, reply_text_from_response};
use super::types::message::Message;

pub const COMPLETION_API_VERSION: &str = "2024-05-01-preview";
pub const IMAGE_API_VERSION: &str = "2024-04-01-preview";

fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(600)) // 10 minutes timeout
        .build()?;
    Ok(client)
}

fn deployment_url(endpoint: &str, deployment: &str, operation: &str, api_version: &str) -> String {
    format!(
        "{}/openai/deployments/{}/{}?api-version={}",
        endpoint.trim_end_matches('/'),
        deployment,
        operation,
        api_version
    )
}

// One POST, one response. No retry on any status.
fn post(client: &Client, url: &str, api_key: &str, payload: Value) -> Result<Value> {
    let response = client
        .post(url)
        .header("api-key", api_key)
        .json(&payload)
        .send()?;

    match response.status() {
        StatusCode::OK => Ok(response.json()?),
        status => {
            let body = response.text().unwrap_or_default();
            Err(anyhow!("request failed: {}: {}", status, api_error_detail(&body)))
        }
    }
}

pub struct AzureCompletionProvider {
    client: Client,
    config: AzureCompletionConfig,
}

impl AzureCompletionProvider {
    pub fn new(config: AzureCompletionConfig) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AzureCompletionConfig::from_env()?)
    }
}

impl CompletionProvider for AzureCompletionProvider {
    fn complete(&self, model: &str, messages: &[Message]) -> Result<String> {
        let payload = json!({
            "messages": messages_to_chat_spec(messages),
        });

        let url = deployment_url(
            &self.config.endpoint,
            model,
            "chat/completions",
            COMPLETION_API_VERSION,
        );
        let response = post(&self.client, &url, &self.config.api_key, payload)?;

        if let Some(error) = response.get("error") {
            return Err(anyhow!("completion API error: {}", error));
        }

        reply_text_from_response(&response)
    }
}

pub struct AzureImageProvider {
    client: Client,
    config: AzureImageConfig,
}

impl AzureImageProvider {
    pub fn new(config: AzureImageConfig) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AzureImageConfig::from_env()?)
    }
}

impl ImageProvider for AzureImageProvider {
    fn generate(&self, model: &str, prompt: &str, size: &str) -> Result<String> {
        let payload = json!({
            "prompt": prompt,
            "size": size,
            "n": 1,
        });

        let url = deployment_url(
            &self.config.endpoint,
            model,
            "images/generations",
            IMAGE_API_VERSION,
        );
        let response = post(&self.client, &url, &self.config.api_key, payload)?;

        if let Some(error) = response.get("error") {
            return Err(anyhow!("image API error: {}", error));
        }

        response["data"][0]["url"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no image url in response: {}", response))
    }
}
