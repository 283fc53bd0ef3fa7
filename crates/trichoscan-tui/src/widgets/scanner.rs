//! Scanning/Analyzing panel
//!
//! Image summary, a sweeping scan line driven by the tick counter, the
//! loading text with its progress label, a gauge and three channel chips.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};
use trichoscan_core::{EncodedImage, ScanPhase};

use super::dashboard::sample_summary;
use crate::theme::{palette, styles};

const CHANNELS: [&str; 3] = ["DENSITY", "CORTEX", "BULB"];

pub struct ScannerPanel<'a> {
    phase: ScanPhase,
    image: Option<&'a EncodedImage>,
    loading_text: &'a str,
    frame: u16,
}

impl<'a> ScannerPanel<'a> {
    pub fn new(phase: ScanPhase, loading_text: &'a str) -> Self {
        Self {
            phase,
            image: None,
            loading_text,
            frame: 0,
        }
    }

    pub fn image(mut self, image: Option<&'a EncodedImage>) -> Self {
        self.image = image;
        self
    }

    pub fn frame(mut self, frame: u16) -> Self {
        self.frame = frame;
        self
    }

    fn render_viewport(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let grid = Style::default().fg(palette::SCAN_GRID);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if (x - area.left()) % 4 == 0 {
                    buf[(x, y)].set_symbol("·").set_style(grid);
                }
            }
        }

        let line_y = area.top() + scan_line_offset(self.frame, area.height);
        let line = Style::default().fg(palette::SCAN_LINE);
        for x in area.left()..area.right() {
            buf[(x, line_y)].set_symbol("━").set_style(line);
        }
    }
}

/// Row of the scan line inside a viewport of `height` rows
pub(crate) fn scan_line_offset(frame: u16, height: u16) -> u16 {
    if height == 0 {
        0
    } else {
        frame % height
    }
}

impl Widget for ScannerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("SCANNER", true);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // image summary
            Constraint::Min(1),    // viewport
            Constraint::Length(1), // loading text
            Constraint::Length(1), // gauge
            Constraint::Length(1), // chips
        ])
        .split(inner);

        if let Some(image) = self.image {
            Line::from(Span::styled(
                format!(" {}", sample_summary(image)),
                styles::text_secondary(),
            ))
            .render(chunks[0], buf);
        }

        self.render_viewport(chunks[1], buf);

        let mut status = vec![Span::styled(
            format!(" {}", self.loading_text),
            styles::accent_bold(),
        )];
        if let Some(progress) = self.phase.progress_label() {
            status.push(Span::styled(format!("  {}", progress), styles::text_muted()));
        }
        Line::from(status).render(chunks[2], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::BAR_EMPTY))
            .ratio(self.phase.progress_ratio().clamp(0.0, 1.0))
            .label("")
            .render(chunks[3], buf);

        let mut chips = Vec::new();
        for channel in CHANNELS {
            chips.push(Span::styled(format!("[{}]", channel), styles::accent()));
            chips.push(Span::raw("  "));
        }
        Line::from(chips)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_image, TestTerminal};

    #[test]
    fn test_scan_line_wraps_with_frame() {
        assert_eq!(scan_line_offset(0, 10), 0);
        assert_eq!(scan_line_offset(7, 10), 7);
        assert_eq!(scan_line_offset(23, 10), 3);
        assert_eq!(scan_line_offset(5, 0), 0);
    }

    #[test]
    fn test_scanning_panel_content() {
        let image = test_image();
        let mut term = TestTerminal::new();
        term.render_widget(
            ScannerPanel::new(ScanPhase::Scanning, "CALIBRATING OPTICAL SENSORS...")
                .image(Some(&image)),
            term.area(),
        );

        assert!(term.buffer_contains("image/png · 64×48 px"));
        assert!(term.buffer_contains("CALIBRATING OPTICAL SENSORS..."));
        assert!(term.buffer_contains("30%"));
        assert!(term.buffer_contains("[DENSITY]"));
        assert!(term.buffer_contains("[CORTEX]"));
        assert!(term.buffer_contains("[BULB]"));
    }

    #[test]
    fn test_analyzing_progress_label() {
        let mut term = TestTerminal::new();
        term.render_widget(
            ScannerPanel::new(ScanPhase::Analyzing, "PROCESSING AI DATA..."),
            term.area(),
        );

        assert!(term.buffer_contains("PROCESSING AI DATA..."));
        assert!(term.buffer_contains("85%"));
    }

    #[test]
    fn test_scan_line_follows_frame() {
        let mut term = TestTerminal::with_size(40, 12);
        term.render_widget(
            ScannerPanel::new(ScanPhase::Scanning, "x").frame(2),
            term.area(),
        );
        // border row + summary row + offset 2
        assert!(term.line_contains(4, "━━━━"));
        assert!(!term.line_contains(3, "━━━━"));
    }
}
