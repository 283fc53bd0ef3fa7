//! Idle panel: image path prompt

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use trichoscan_core::ACCEPTED_EXTENSIONS;

use crate::theme::styles;

pub struct UploadPanel<'a> {
    input: &'a str,
}

impl<'a> UploadPanel<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("DIGITAL TRICHOSCOPY", true);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(2), // description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // prompt
            Constraint::Length(1), // formats
            Constraint::Min(0),
            Constraint::Length(1), // tip
        ])
        .split(inner);

        Paragraph::new(
            "Upload a close-up of hair or scalp for a structured AI analysis \
             of density, thickness, hydration and scalp health.",
        )
        .style(styles::text_secondary())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

        Line::from(vec![
            Span::styled(" > ", styles::accent_bold()),
            Span::styled(self.input, styles::text_primary()),
            Span::styled("█", styles::accent()),
        ])
        .render(chunks[3], buf);

        Line::from(Span::styled(
            format!("   Accepted: {}", ACCEPTED_EXTENSIONS.join(", ")),
            styles::text_muted(),
        ))
        .render(chunks[4], buf);

        Line::from(Span::styled(
            "Tip: use a macro lens and even lighting for best results",
            styles::text_muted(),
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_prompt_shows_typed_path() {
        let mut term = TestTerminal::new();
        term.render_widget(UploadPanel::new("~/scans/crown.jpg"), term.area());

        assert!(term.buffer_contains("DIGITAL TRICHOSCOPY"));
        assert!(term.buffer_contains("> ~/scans/crown.jpg█"));
        assert!(term.buffer_contains("Accepted: png, jpg"));
        assert!(term.buffer_contains("macro lens"));
    }
}
