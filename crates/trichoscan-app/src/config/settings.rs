//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::{Settings, SettingsOverrides};
use trichoscan_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "trichoscan";

/// `<config_dir>/trichoscan/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the default location.
///
/// A missing file yields defaults. A file that cannot be read or parsed is
/// logged and also yields defaults; the app never refuses to start over
/// configuration.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let mut settings = match path {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    };
    settings.validate();
    settings
}

/// Load settings, then apply command-line overrides
pub fn load_settings_with_overrides(
    explicit: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Settings {
    let mut settings = load_settings(explicit);
    settings.apply_overrides(overrides);
    settings.validate();
    settings
}

fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(config_path, &content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn parse_settings(path: &Path, content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(path, e.to_string()))
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[scan]
dwell_ms = 1200

[analysis]
model = "gemini-2.5-pro"
api_key_env = "MY_KEY"
timeout_secs = 15

[ui]
tick_ms = 100

[export]
reports_dir = "/tmp/reports"
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.scan.dwell_ms, 1200);
        assert_eq!(settings.analysis.model, "gemini-2.5-pro");
        assert_eq!(settings.analysis.api_key_env, "MY_KEY");
        assert_eq!(settings.analysis.timeout_secs, 15);
        assert_eq!(settings.ui.tick_ms, 100);
        assert_eq!(settings.export.reports_dir, "/tmp/reports");
    }

    #[test]
    fn test_parse_error_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[scan\ndwell_ms = ").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_settings(Path::new("/etc/trichoscan.toml"), "[scan").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains("/etc/trichoscan.toml"));
    }

    #[test]
    fn test_loaded_values_are_validated() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntick_ms = 1\n").unwrap();

        assert_eq!(load_settings(Some(&path)).ui.tick_ms, 16);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[scan]\ndwell_ms = 1200\n").unwrap();

        let settings = load_settings_with_overrides(
            Some(&path),
            &SettingsOverrides {
                dwell_ms: Some(10),
                model: None,
            },
        );
        assert_eq!(settings.scan.dwell_ms, 10);
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("trichoscan/config.toml"));
        }
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/scans"), home.join("scans"));
        }
    }
}
