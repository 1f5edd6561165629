//! Builder module for configuring and instantiating LLM providers.

use std::marker::PhantomData;

/// Builder for configuring and instantiating LLM providers.
pub struct LLMBuilder<T> {
    pub(crate) backend: PhantomData<T>,
    /// API key for authentication with the provider
    pub(crate) api_key: Option<String>,
    /// Base URL for API requests
    pub(crate) base_url: Option<String>,
    /// Model identifier to use
    pub(crate) model: Option<String>,
    /// Maximum tokens to generate
    pub(crate) max_tokens: Option<u32>,
    /// Temperature for response randomness
    pub(crate) temperature: Option<f32>,
    /// Request timeout in seconds
    pub(crate) timeout_seconds: Option<u64>,
}

impl<T> LLMBuilder<T> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            backend: PhantomData,
            api_key: None,
            base_url: None,
            model: None,
            max_tokens: None,
            temperature: None,
            timeout_seconds: None,
        }
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl<T> Default for LLMBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
