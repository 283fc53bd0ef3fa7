//! One-line notice bar

use ratatui::{buffer::Buffer, layout::Rect, text::Line, text::Span, widgets::Widget};

use crate::theme::styles;

/// Shows the current notice, if any
pub struct NoticeBar<'a> {
    notice: Option<&'a str>,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(notice) = self.notice else {
            return;
        };
        Line::from(vec![
            Span::styled(" ! ", styles::status_yellow()),
            Span::styled(notice, styles::text_secondary()),
        ])
        .render(area, buf);
    }
}
