//! Bottom status bar: key hints for the current view, then the last message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sectorboard_core::route::Route;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn hints(route: &Route) -> &'static str {
    match route {
        Route::Dashboard => " j/k:move 1-9:sort Enter:report r:reload ?:help q:quit",
        Route::Report { .. } => " Esc:back j/k:industry Enter:open PgUp/PgDn:scroll r:reload q:quit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(hints(&app.route), theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    if !app.error_history.is_empty() {
        spans.push(Span::styled(
            format!("  [e] {} errors", app.error_history.len()),
            theme::muted(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
