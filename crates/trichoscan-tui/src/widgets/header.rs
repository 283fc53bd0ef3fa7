//! Header bar widget
//!
//! Product title, status dot and phase label on the left, key hints for the
//! current phase on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use trichoscan_core::ScanPhase;

use crate::theme::{palette, styles};

/// Main header showing app title, phase and keybindings
pub struct MainHeader<'a> {
    phase: ScanPhase,
    model: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(phase: ScanPhase) -> Self {
        Self { phase, model: None }
    }

    /// Show the analysis model name after the title
    pub fn with_model(mut self, model: &'a str) -> Self {
        self.model = Some(model);
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.phase {
            ScanPhase::Idle => &[("Enter", "Scan"), ("Esc", "Clear/Quit")],
            ScanPhase::Scanning | ScanPhase::Analyzing => &[("q", "Quit")],
            ScanPhase::Results => &[("n", "New"), ("e", "Export"), ("q", "Quit")],
            ScanPhase::Error => &[("n", "New"), ("q", "Quit")],
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = styles::phase_indicator(self.phase);

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "TrichoScan",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(model) = self.model {
            left_spans.push(Span::styled(" / ", styles::text_muted()));
            left_spans.push(Span::styled(model, styles::text_secondary()));
        }
        left_spans.push(Span::raw("  "));
        left_spans.push(Span::styled(self.phase.label(), status_style));

        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;
        left_line.render(inner, buf);

        let mut right_spans = Vec::new();
        for (key, action) in self.hints() {
            right_spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            right_spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        let right_line = Line::from(right_spans);
        let right_width = right_line.width() as u16;

        // Hints only when they fit next to the title
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            right_line.render(right_area, buf);
        }
    }
}
