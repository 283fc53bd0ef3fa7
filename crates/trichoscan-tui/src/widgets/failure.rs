//! Error phase panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Generic failure message with the reset hint.
///
/// The detailed reason is not shown here; it is in the log.
pub struct FailurePanel;

impl Widget for FailurePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("ANALYSIS FAILED", true);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("✗ ANALYSIS FAILED", styles::status_red())),
            Line::from(""),
            Line::from(Span::styled(
                "The image could not be analyzed. Check the log for details.",
                styles::text_secondary(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[n]", styles::keybinding()),
                Span::styled(" Start a new scan  ", styles::text_muted()),
                Span::styled("[q]", styles::keybinding()),
                Span::styled(" Quit", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
