//! trichoscan-tui - Terminal UI for TrichoScan
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from trichoscan-app and adds terminal rendering, event polling and
//! the per-phase panels (upload prompt, scanner, results dashboard, failure).

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
