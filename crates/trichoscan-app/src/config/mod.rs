//! Configuration file parsing for TrichoScan
//!
//! Settings live in `<config_dir>/trichoscan/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, expand_home, load_settings, load_settings_with_overrides,
};
pub use types::*;
