use super::base::ProviderConfig;
use anyhow::Result;

/// Endpoint and credential for the chat-completions resource.
pub struct AzureCompletionConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl AzureCompletionConfig {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self { endpoint, api_key }
    }
}

impl ProviderConfig for AzureCompletionConfig {
    fn from_env() -> Result<Self> {
        let endpoint = Self::get_env("AZURE_OPENAI_ENDPOINT", true, None)?
            .ok_or_else(|| anyhow::anyhow!("Azure OpenAI endpoint should be present"))?;

        let api_key = Self::get_env("AZURE_OPENAI_KEY", true, None)?
            .ok_or_else(|| anyhow::anyhow!("Azure OpenAI key should be present"))?;

        Ok(Self::new(endpoint, api_key))
    }
}

/// Endpoint and credential for the image-generations resource. The image
/// deployment lives on its own resource, so it carries its own pair.
pub struct AzureImageConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl AzureImageConfig {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self { endpoint, api_key }
    }
}

impl ProviderConfig for AzureImageConfig {
    fn from_env() -> Result<Self> {
        let endpoint = Self::get_env("AZURE_IMAGE_ENDPOINT", true, None)?
            .ok_or_else(|| anyhow::anyhow!("Azure image endpoint should be present"))?;

        let api_key = Self::get_env("AZURE_IMAGE_KEY", true, None)?
            .ok_or_else(|| anyhow::anyhow!("Azure image key should be present"))?;

        Ok(Self::new(endpoint, api_key))
    }
}
