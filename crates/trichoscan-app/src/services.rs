//! Construction of the analysis client from settings

use std::sync::Arc;

use trichoscan_core::prelude::*;
use trichoscan_vision::{GeminiClient, GeminiConfig, SharedAnalysisClient, UnconfiguredClient};

use crate::config::AnalysisSettings;

/// Build the client from settings, reading the key from `api_key_env`
pub fn analysis_client_from_env(settings: &AnalysisSettings) -> SharedAnalysisClient {
    let api_key = std::env::var(&settings.api_key_env).ok();
    build_analysis_client(settings, api_key)
}

/// Build the client from settings and an explicit key.
///
/// Without a usable key the app still runs; every analysis then fails with
/// the configuration problem as its reason.
pub fn build_analysis_client(
    settings: &AnalysisSettings,
    api_key: Option<String>,
) -> SharedAnalysisClient {
    let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
        let err = Error::missing_api_key(&settings.api_key_env);
        warn!("{}", err);
        return Arc::new(UnconfiguredClient::new(err.to_string()));
    };

    let config = GeminiConfig {
        provider_url: settings.provider_url.clone(),
        model: settings.model.clone(),
        api_key,
        timeout: settings.timeout(),
    };

    match GeminiClient::new(config) {
        Ok(client) => {
            info!("Using analysis model {}", settings.model);
            Arc::new(client)
        }
        Err(e) => {
            warn!("Analysis client unavailable: {}", e);
            Arc::new(UnconfiguredClient::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_yields_unconfigured_client() {
        let client = build_analysis_client(&AnalysisSettings::default(), None);
        assert_eq!(client.name(), "unconfigured");

        let client = build_analysis_client(&AnalysisSettings::default(), Some("   ".into()));
        assert_eq!(client.name(), "unconfigured");
    }

    #[test]
    fn test_key_yields_gemini_client() {
        let mut settings = AnalysisSettings::default();
        settings.model = "gemini-test".into();

        let client = build_analysis_client(&settings, Some("secret".into()));

        assert_eq!(client.name(), "gemini-test");
    }

    #[tokio::test]
    async fn test_unconfigured_client_names_env_var() {
        let client = build_analysis_client(&AnalysisSettings::default(), None);
        let image = trichoscan_core::EncodedImage::from_bytes(
            trichoscan_core::encoded_image::test_support::png(2, 2),
        )
        .unwrap();

        let err = client.analyze(image).await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
