//! Results dashboard
//!
//! Layout, top to bottom: report header with the source sample, four score
//! cards, then two columns.
//! The left column holds the biometric bars and the technical diagnosis; the
//! right column holds detected issues and the numbered recommendations.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use trichoscan_core::{format_score, EncodedImage, HairAnalysis, Metric};

use crate::theme::{palette, styles};

const PROTOCOL_TITLE: &str = "Suggested protocol — RC-BIOSCAN AI v2.4";

pub struct ResultsDashboard<'a> {
    analysis: &'a HairAnalysis,
    report_id: &'a str,
    sample: Option<&'a EncodedImage>,
}

impl<'a> ResultsDashboard<'a> {
    pub fn new(analysis: &'a HairAnalysis, report_id: &'a str) -> Self {
        Self {
            analysis,
            report_id,
            sample: None,
        }
    }

    /// The analyzed image, summarized next to the report id
    pub fn sample(mut self, sample: Option<&'a EncodedImage>) -> Self {
        self.sample = sample;
        self
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" ANALYSIS REPORT ", styles::section_title()),
            Span::styled(format!("#{}", self.report_id), styles::accent_bold()),
        ];
        if let Some(sample) = self.sample {
            spans.push(Span::styled("   SAMPLE ", styles::text_muted()));
            spans.push(Span::styled(sample_summary(sample), styles::text_secondary()));
        }
        Line::from(spans).render(area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (metric, col) in self.analysis.score_cards().iter().zip(cols.iter()) {
            ScoreCard { metric: *metric }.render(*col, buf);
        }
    }

    fn render_profile(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("BIOMETRIC PROFILE", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_width = inner.width.saturating_sub(18) as usize;
        let lines: Vec<Line> = self
            .analysis
            .metrics()
            .iter()
            .map(|metric| {
                Line::from(vec![
                    Span::styled(format!(" {:<10}", metric.label), styles::text_secondary()),
                    Span::styled(
                        metric_bar(metric.ratio(), bar_width),
                        styles::score_style(metric.value),
                    ),
                    Span::styled(
                        format!(" {:>5}", format_score(metric.value)),
                        styles::text_primary(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_diagnosis(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("TECHNICAL DIAGNOSIS", false);
        Paragraph::new(self.analysis.technical_summary.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_issues(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("DETECTED ISSUES", false);

        let mut lines = vec![Line::from(vec![
            Span::styled("Condition: ", styles::text_muted()),
            Span::styled(self.analysis.condition.as_str(), styles::accent_bold()),
        ])];
        if self.analysis.detected_issues.is_empty() {
            lines.push(Line::from(Span::styled("None detected", styles::text_muted())));
        }
        for issue in &self.analysis.detected_issues {
            lines.push(Line::from(vec![
                Span::styled("• ", styles::status_yellow()),
                Span::styled(issue.as_str(), styles::text_primary()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }

    fn render_recommendations(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("RECOMMENDATIONS", false);

        let mut lines = vec![Line::from(Span::styled(PROTOCOL_TITLE, styles::text_muted()))];
        for (i, rec) in self.analysis.recommendations.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:02} ", i + 1), styles::accent_bold()),
                Span::styled(rec.as_str(), styles::text_primary()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for ResultsDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(1), // report header
            Constraint::Length(4), // score cards
            Constraint::Min(6),    // details
        ])
        .split(area);

        self.render_header(rows[0], buf);

        self.render_cards(rows[1], buf);

        let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        let left = Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).split(cols[0]);
        let right = Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(cols[1]);

        self.render_profile(left[0], buf);
        self.render_diagnosis(left[1], buf);
        self.render_issues(right[0], buf);
        self.render_recommendations(right[1], buf);
    }
}

struct ScoreCard {
    metric: Metric,
}

impl Widget for ScoreCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(self.metric.label, styles::text_muted())),
            Line::from(vec![
                Span::styled(
                    format_score(self.metric.value),
                    styles::score_style(self.metric.value),
                ),
                Span::styled("/100", Style::default().fg(palette::TEXT_MUTED)),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// `image/png · 640×480 px · 1.2 MB`
pub fn sample_summary(image: &EncodedImage) -> String {
    format!(
        "{} · {}×{} px · {}",
        image.mime_type(),
        image.width(),
        image.height(),
        image.size_label()
    )
}

/// Text bar of `width` cells filled in proportion to `ratio` (clamped to 0..=1)
pub fn metric_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (ratio * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_image, TestTerminal};
    use trichoscan_vision::test_utils::sample_analysis;

    #[test]
    fn test_metric_bar_fill() {
        assert_eq!(metric_bar(0.0, 4), "░░░░");
        assert_eq!(metric_bar(0.5, 4), "██░░");
        assert_eq!(metric_bar(1.0, 4), "████");
        assert_eq!(metric_bar(1.7, 3), "███");
        assert_eq!(metric_bar(-0.2, 3), "░░░");
        assert_eq!(metric_bar(f64::NAN, 2), "░░");
        assert_eq!(metric_bar(0.5, 0), "");
    }

    #[test]
    fn test_dashboard_renders_every_section() {
        let analysis = sample_analysis();
        let mut term = TestTerminal::new();
        term.render_widget(ResultsDashboard::new(&analysis, "A1B2C3D4E"), term.area());

        assert!(term.buffer_contains("ANALYSIS REPORT #A1B2C3D4E"));
        assert!(term.buffer_contains("OVERALL HEALTH"));
        assert!(term.buffer_contains("82/100"));
        assert!(term.buffer_contains("BIOMETRIC PROFILE"));
        assert!(term.buffer_contains("TECHNICAL DIAGNOSIS"));
        assert!(term.buffer_contains("Condition: Mild dryness"));
        assert!(term.buffer_contains("• Split ends"));
        assert!(term.buffer_contains("RC-BIOSCAN AI v2.4"));
        assert!(term.buffer_contains("01 Weekly hydrating mask"));
        assert!(term.buffer_contains("02 Reduce heat styling"));
    }

    #[test]
    fn test_header_summarizes_source_sample() {
        let analysis = sample_analysis();
        let image = test_image();
        let mut term = TestTerminal::new();
        term.render_widget(
            ResultsDashboard::new(&analysis, "A1B2C3D4E").sample(Some(&image)),
            term.area(),
        );

        assert!(term.line_contains(0, "#A1B2C3D4E"));
        assert!(term.line_contains(0, "SAMPLE image/png · 64×48 px · "));
        assert!(term.line_contains(0, &image.size_label()));
    }

    #[test]
    fn test_header_without_sample() {
        let analysis = sample_analysis();
        let mut term = TestTerminal::new();
        term.render_widget(ResultsDashboard::new(&analysis, "X"), term.area());

        assert!(!term.buffer_contains("SAMPLE"));
    }

    #[test]
    fn test_out_of_range_scores_render_verbatim() {
        let mut analysis = sample_analysis();
        analysis.overall_health_score = 120.0;
        let mut term = TestTerminal::new();
        term.render_widget(ResultsDashboard::new(&analysis, "X"), term.area());

        assert!(term.buffer_contains("120/100"));
    }

    #[test]
    fn test_empty_issue_list() {
        let mut analysis = sample_analysis();
        analysis.detected_issues.clear();
        let mut term = TestTerminal::new();
        term.render_widget(ResultsDashboard::new(&analysis, "X"), term.area());

        assert!(term.buffer_contains("None detected"));
    }
}
