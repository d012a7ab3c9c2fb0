//! Top-level UI layout: the active view, a status bar, overlays on top.

pub mod dashboard;
pub mod overlays;
pub mod range_bar;
pub mod report;
pub mod status_bar;
pub mod tooltip;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use sectorboard_core::route::Route;

use crate::app::{AppState, Overlay};
use crate::layout;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let (main_area, status_area) = layout::screen(f.area());

    match &app.route {
        Route::Dashboard => {
            dashboard::render(f, main_area, app);
            if let Some(tip) = app.dashboard.tooltip() {
                tooltip::render(f, tip);
            }
        }
        Route::Report { .. } => report::render(f, main_area, app),
    }

    status_bar::render(f, status_area, app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate to `max` characters, marking the cut with a trailing '.'.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('.');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Energy", 10), "Energy");
        assert_eq!(truncate("Consumer Cyclical", 8), "Consume.");
        assert_eq!(truncate("Énergie", 3), "Én.");
        assert_eq!(truncate("x", 0), "");
    }
}
