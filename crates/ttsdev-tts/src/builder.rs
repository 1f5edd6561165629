//! Builder module for configuring and instantiating TTS providers.

use std::marker::PhantomData;

/// Builder for configuring and instantiating TTS providers.
///
/// Provides a fluent interface for the shared configuration surface:
/// API key, base URL (self-hosted gateways, tests), model and request
/// timeout. Each backend supplies its own `build()` impl.
pub struct TTSBuilder<T> {
    pub(crate) backend: PhantomData<T>,
    /// API key for authentication with the provider
    pub(crate) api_key: Option<String>,
    /// Base URL for API requests
    pub(crate) base_url: Option<String>,
    /// Model identifier, for providers that take one
    pub(crate) model: Option<String>,
    /// Request timeout in seconds
    pub(crate) timeout_seconds: Option<u64>,
}

impl<T> TTSBuilder<T> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            backend: PhantomData,
            api_key: None,
            base_url: None,
            model: None,
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

    /// Set the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl<T> Default for TTSBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
