//! Comparison table: header, benchmark row, ranked industries.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sectorboard_core::dashboard::LoadState;
use sectorboard_core::domain::IndustryRecord;
use sectorboard_core::format;
use sectorboard_core::range::pe_range;
use sectorboard_core::sort::{SortConfig, SortKey};

use crate::app::AppState;
use crate::layout::{self, Column, ColumnSpan};
use crate::theme;
use crate::ui::{range_bar, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let sort = app.dashboard.sort();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(
            " Industries | sorted by {} {} ",
            sort.key.label(),
            sort.direction.arrow()
        ))
        .title_style(theme::panel_title(true));
    let table = layout::dashboard_table(area);
    f.render_widget(block, area);

    match app.dashboard.load_state() {
        LoadState::Loading => {
            let text = Paragraph::new(Span::styled("Loading industry data...", theme::muted()));
            f.render_widget(text, table);
        }
        LoadState::Failed(message) => render_failure(f, table, message),
        LoadState::Populated(_) => render_table(f, table, app),
    }
}

fn render_failure(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled("Could not load industry data", theme::negative())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::secondary())),
        Line::from(""),
        Line::from(Span::styled("Press r to reload", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = layout::column_spans(area);
    let sort = app.dashboard.sort();
    let rows = app.dashboard.rows();
    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);

    lines.push(header_line(&columns, sort));

    let benchmark = match app.dashboard.benchmark() {
        Some(record) => {
            let style = Style::default().add_modifier(Modifier::BOLD);
            record_line(&columns, record, Some(style))
        }
        None => Line::from(Span::styled("Benchmark unavailable", theme::muted())),
    };
    lines.push(benchmark);
    lines.push(Line::from(Span::styled(
        "─".repeat(area.width as usize),
        theme::muted(),
    )));

    if rows.is_empty() {
        lines.push(Line::from(Span::styled("No industries returned.", theme::muted())));
    }

    let visible = layout::visible_rows(area);
    for (index, record) in rows.iter().enumerate().skip(app.table_offset).take(visible) {
        let highlight = (index == app.cursor).then(theme::cursor);
        lines.push(record_line(&columns, record, highlight));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn header_line(columns: &[ColumnSpan], sort: SortConfig) -> Line<'static> {
    let spans = columns
        .iter()
        .map(|span| {
            let width = span.width as usize;
            match span.column {
                Column::Sort(key) if key == sort.key => Span::styled(
                    cell(&format!("{} {}", key.label(), sort.direction.arrow()), width, key),
                    theme::accent_bold().add_modifier(Modifier::UNDERLINED),
                ),
                Column::Sort(key) => Span::styled(cell(key.label(), width, key), theme::accent_bold()),
                Column::PeRange => Span::styled(
                    format!("{:<width$}", span.column.label()),
                    theme::accent_bold(),
                ),
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Text cell: names left-aligned, numbers right-aligned with a gap.
fn cell(text: &str, width: usize, key: SortKey) -> String {
    match key {
        SortKey::Name => format!("{:<width$}", truncate(text, width.saturating_sub(1))),
        _ => format!("{:>w$} ", truncate(text, width.saturating_sub(1)), w = width.saturating_sub(1)),
    }
}

fn record_line(columns: &[ColumnSpan], record: &IndustryRecord, highlight: Option<Style>) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(columns.len() + 3);
    for span in columns {
        let width = span.width as usize;
        match span.column {
            Column::Sort(key) => {
                let (text, style) = match key {
                    SortKey::Name => (record.name.clone(), theme::text()),
                    SortKey::Roi(h) => {
                        let value = record.roi(h);
                        (format::signed_percent(value), theme::change(value))
                    }
                    SortKey::PeToday => (format::decimal(record.pe_today), theme::secondary()),
                    SortKey::MarketBreadth => {
                        (format::percent(record.market_breadth), theme::breadth(record.market_breadth))
                    }
                };
                let style = highlight.map_or(style, |h| style.patch(h));
                spans.push(Span::styled(cell(&text, width, key), style));
            }
            Column::PeRange => {
                let bar = range_bar::spans(&pe_range(record), span.width);
                match highlight {
                    Some(h) => spans.extend(bar.into_iter().map(|s| {
                        let style = s.style.patch(h);
                        s.style(style)
                    })),
                    None => spans.extend(bar),
                }
            }
        }
    }
    Line::from(spans)
}
