//! Google Gemini analysis client

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use reqwest::Client;
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, HairAnalysis};

use crate::client::AnalysisClient;
use crate::protocol;

/// Default multimodal model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Public Generative Language API endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub provider_url: String,
    pub model: String,
    pub api_key: String,
    /// Whole-request timeout applied by the HTTP client
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// `{provider}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.provider_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Client for the Gemini `generateContent` REST API
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    config: Arc<GeminiConfig>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("Gemini API key is empty"));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn generate(
        http: Client,
        config: Arc<GeminiConfig>,
        image: EncodedImage,
    ) -> Result<HairAnalysis> {
        let request = protocol::build_request(&image);
        debug!(
            "Posting {} ({}) to {}",
            image.mime_type(),
            image.size_label(),
            config.model
        );

        let response = http
            .post(config.endpoint())
            .header("x-goog-api-key", &config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::analysis(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::analysis(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::analysis(protocol::describe_error_status(
                status.as_u16(),
                &body,
            )));
        }

        protocol::parse_response(&body)
    }
}

impl AnalysisClient for GeminiClient {
    fn analyze(&self, image: EncodedImage) -> BoxFuture<'static, Result<HairAnalysis>> {
        Self::generate(self.http.clone(), Arc::clone(&self.config), image).boxed()
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
