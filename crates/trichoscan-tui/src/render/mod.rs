//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use trichoscan_app::AppState;
use trichoscan_core::ScanPhase;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Upload prompt box size inside the body
const UPLOAD_WIDTH: u16 = 72;
const UPLOAD_HEIGHT: u16 = 12;

/// Failure panel box size inside the body
const FAILURE_WIDTH: u16 = 64;
const FAILURE_HEIGHT: u16 = 10;

/// Render the complete UI for the current phase.
///
/// Pure with respect to `state`: exactly one phase panel is drawn.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.phase).with_model(&state.settings.analysis.model),
        areas.header,
    );

    match state.phase {
        ScanPhase::Idle => {
            frame.render_widget(
                widgets::UploadPanel::new(&state.path_input),
                layout::centered(areas.body, UPLOAD_WIDTH, UPLOAD_HEIGHT),
            );
        }
        ScanPhase::Scanning | ScanPhase::Analyzing => {
            frame.render_widget(
                widgets::ScannerPanel::new(state.phase, state.loading_text)
                    .image(state.image.as_ref())
                    .frame(state.scan_frame),
                areas.body,
            );
        }
        ScanPhase::Results => match (&state.analysis, &state.report_id) {
            (Some(analysis), Some(report_id)) => {
                frame.render_widget(
                    widgets::ResultsDashboard::new(analysis, report_id)
                        .sample(state.image.as_ref()),
                    areas.body,
                );
            }
            _ => tracing::warn!("Results phase without an analysis, nothing to draw"),
        },
        ScanPhase::Error => {
            frame.render_widget(
                widgets::FailurePanel,
                layout::centered(areas.body, FAILURE_WIDTH, FAILURE_HEIGHT),
            );
        }
    }

    frame.render_widget(widgets::NoticeBar::new(state.notice.as_deref()), areas.footer);
}
