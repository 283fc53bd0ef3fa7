//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and full frames can be rendered
//! and searched as text, plus builders for an [`AppState`] in each phase.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use trichoscan_app::AppState;
use trichoscan_core::encoded_image::test_support;
use trichoscan_core::{EncodedImage, HairAnalysis};
use trichoscan_vision::test_utils::sample_analysis;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test wrapper around a TestBackend terminal.
///
/// ```ignore
/// let mut term = TestTerminal::new();
/// term.render_widget(my_widget, term.area());
/// assert!(term.buffer_contains("expected text"));
/// ```
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

// ─────────────────────────────────────────────────────────
// State builders
// ─────────────────────────────────────────────────────────

pub fn test_image() -> EncodedImage {
    EncodedImage::from_bytes(test_support::png(64, 48)).expect("test png decodes")
}

pub fn idle_state() -> AppState {
    AppState::new()
}

pub fn scanning_state() -> AppState {
    let mut state = AppState::new();
    state.accept_image(test_image()).expect("idle accepts");
    state
}

pub fn analyzing_state() -> AppState {
    let mut state = AppState::new();
    let token = state.accept_image(test_image()).expect("idle accepts");
    state.begin_analysis(token).expect("scanning advances");
    state
}

pub fn results_state_with(analysis: HairAnalysis) -> AppState {
    let mut state = AppState::new();
    let token = state.accept_image(test_image()).expect("idle accepts");
    state.begin_analysis(token).expect("scanning advances");
    assert!(state.settle_analysis(token, Ok(analysis)));
    state
}

pub fn results_state() -> AppState {
    results_state_with(sample_analysis())
}

pub fn error_state() -> AppState {
    let mut state = AppState::new();
    let token = state.accept_image(test_image()).expect("idle accepts");
    state.begin_analysis(token).expect("scanning advances");
    assert!(state.settle_analysis(token, Err("HTTP 503: unavailable".to_string())));
    state
}
