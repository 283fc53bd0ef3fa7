//! trichoscan-app - Application state and orchestration for TrichoScan
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the scan
//! lifecycle: [`Message`]s go through [`handler::update`], which mutates
//! [`AppState`] and returns [`UpdateAction`]s. The [`Engine`] dispatches those
//! actions as tokio tasks (dwell timer, analysis call, file reads, report
//! export) whose results come back as messages on the same channel.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod report;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::ScanTaskSet;
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use report::AnalysisReport;
pub use state::AppState;
