//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use trichoscan_vision::{DEFAULT_MODEL, DEFAULT_PROVIDER_URL};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Scan lifecycle settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanSettings {
    /// Simulated sensor calibration before the remote call is issued
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            dwell_ms: default_dwell_ms(),
        }
    }
}

impl ScanSettings {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}

fn default_dwell_ms() -> u64 {
    3000
}

/// Analysis service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnalysisSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval; also drives the scan-line animation
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_tick_ms() -> u64 {
    50
}

/// Report export settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Target directory; empty means `<data dir>/trichoscan/reports`
    #[serde(default)]
    pub reports_dir: String,
}

impl ExportSettings {
    pub fn reports_dir(&self) -> PathBuf {
        let configured = self.reports_dir.trim();
        if configured.is_empty() {
            trichoscan_core::logging::data_directory().join("reports")
        } else {
            super::settings::expand_home(configured)
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub dwell_ms: Option<u64>,
    pub model: Option<String>,
}

impl Settings {
    /// Clamp values into their usable ranges
    pub fn validate(&mut self) {
        if self.analysis.timeout_secs == 0 {
            self.analysis.timeout_secs = 1;
        }
        self.ui.tick_ms = self.ui.tick_ms.clamp(16, 1000);
    }

    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(dwell_ms) = overrides.dwell_ms {
            self.scan.dwell_ms = dwell_ms;
        }
        if let Some(model) = overrides.model.as_ref().filter(|m| !m.trim().is_empty()) {
            self.analysis.model = model.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scan.dwell_ms, 3000);
        assert_eq!(settings.analysis.model, "gemini-2.5-flash");
        assert_eq!(settings.analysis.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.analysis.timeout(), Duration::from_secs(60));
        assert_eq!(settings.ui.tick_rate(), Duration::from_millis(50));
        assert!(settings.export.reports_dir.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("[scan]\ndwell_ms = 500\n").unwrap();
        assert_eq!(settings.scan.dwell(), Duration::from_millis(500));
        assert_eq!(settings.analysis, AnalysisSettings::default());
    }

    #[test]
    fn test_validate_clamps() {
        let mut settings = Settings::default();
        settings.analysis.timeout_secs = 0;
        settings.ui.tick_ms = 1;
        settings.validate();
        assert_eq!(settings.analysis.timeout_secs, 1);
        assert_eq!(settings.ui.tick_ms, 16);

        settings.ui.tick_ms = 60_000;
        settings.validate();
        assert_eq!(settings.ui.tick_ms, 1000);
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides(&SettingsOverrides {
            dwell_ms: Some(0),
            model: Some("gemini-2.5-pro".into()),
        });
        assert_eq!(settings.scan.dwell_ms, 0);
        assert_eq!(settings.analysis.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_blank_model_override_ignored() {
        let mut settings = Settings::default();
        settings.apply_overrides(&SettingsOverrides {
            dwell_ms: None,
            model: Some("  ".into()),
        });
        assert_eq!(settings.analysis.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_reports_dir_configured() {
        let export = ExportSettings {
            reports_dir: "/tmp/trichoscan-reports".into(),
        };
        assert_eq!(export.reports_dir(), PathBuf::from("/tmp/trichoscan-reports"));
    }

    #[test]
    fn test_reports_dir_default_under_data_dir() {
        let dir = ExportSettings::default().reports_dir();
        assert!(dir.ends_with("trichoscan/reports"));
    }
}
