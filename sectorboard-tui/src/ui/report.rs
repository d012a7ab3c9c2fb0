//! Report view: industry sidebar on the left, the document on the right.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sectorboard_core::domain::{IndustryRecord, RoiHorizon};
use sectorboard_core::format;
use sectorboard_core::range::pe_range;
use sectorboard_core::report_view::{ReportLoad, ReportView, ReportViewState};

use crate::app::AppState;
use crate::layout;
use crate::theme;
use crate::ui::{range_bar, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(state) = app.report.as_ref() else {
        return;
    };
    let (sidebar, document) = layout::report_panes(area);
    render_sidebar(f, sidebar, app, state);
    render_document(f, document, app, state);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &AppState, state: &ReportViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Industries ")
        .title_style(theme::panel_title(false));
    let inner = layout::inner(area);
    f.render_widget(block, area);

    let industries = app.sidebar_industries();
    let width = inner.width as usize;
    let lines: Vec<Line> = industries
        .iter()
        .enumerate()
        .skip(app.report_cursor.sidebar_offset)
        .take(inner.height as usize)
        .map(|(i, name)| {
            let style = if i == app.report_cursor.sidebar {
                theme::cursor()
            } else if name == state.industry() {
                theme::accent_bold()
            } else {
                theme::secondary()
            };
            Line::from(Span::styled(format!("{:<width$}", truncate(name, width)), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_document(f: &mut Frame, area: Rect, app: &AppState, state: &ReportViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} | {} ", state.industry(), state.date()))
        .title_style(theme::panel_title(true));
    let inner = layout::inner(area);
    f.render_widget(block, area);

    match state.load_state() {
        ReportLoad::Loading => {
            f.render_widget(Paragraph::new(Span::styled("Loading report...", theme::muted())), inner);
        }
        ReportLoad::Failed(message) => {
            let lines = vec![
                Line::from(Span::styled(message.clone(), theme::negative())),
                Line::from(""),
                Line::from(Span::styled("Press r to retry, Esc to go back", theme::muted())),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
        ReportLoad::Loaded(view) => {
            let lines = document_lines(view, inner.width);
            let para = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((app.report_cursor.scroll, 0));
            f.render_widget(para, inner);
        }
    }
}

/// Body of a loaded report, top to bottom.
pub fn document_lines(view: &ReportView, width: u16) -> Vec<Line<'static>> {
    let doc = &view.document;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(doc.title.clone(), theme::accent_bold())));
    let generated = match doc.generated_on() {
        Some(day) => format!("Generated {}", day.format("%Y-%m-%d")),
        None if doc.generated_at.is_empty() => "Generation date unknown".to_string(),
        None => format!("Generated {}", doc.generated_at),
    };
    lines.push(Line::from(Span::styled(generated, theme::muted())));
    lines.push(Line::from(""));

    if !doc.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            doc.summary.clone(),
            theme::text().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    paragraphs(&mut lines, &doc.body_part_1);

    if let Some(record) = &view.record {
        snapshot(&mut lines, record, width);
    }

    paragraphs(&mut lines, &doc.body_part_2);
    lines
}

fn paragraphs(lines: &mut Vec<Line<'static>>, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    for para in body.lines() {
        lines.push(Line::from(Span::styled(para.to_string(), theme::text())));
    }
    lines.push(Line::from(""));
}

/// Indicator snapshot of the reported industry.
fn snapshot(lines: &mut Vec<Line<'static>>, record: &IndustryRecord, width: u16) {
    lines.push(Line::from(Span::styled("Indicators", theme::accent_bold())));

    let mut roi: Vec<Span<'static>> = vec![Span::styled("  ROI  ", theme::muted())];
    for horizon in RoiHorizon::ALL {
        let value = record.roi(horizon);
        roi.push(Span::styled(format!("{horizon} "), theme::muted()));
        roi.push(Span::styled(format!("{}  ", format::signed_percent(value)), theme::change(value)));
    }
    lines.push(Line::from(roi));

    let mut pe = vec![Span::styled("  P/E  ", theme::muted())];
    pe.extend(range_bar::spans(&pe_range(record), width.saturating_sub(7).min(60)));
    lines.push(Line::from(pe));

    lines.push(Line::from(vec![
        Span::styled("  Breadth  ", theme::muted()),
        Span::styled(
            format::percent(record.market_breadth),
            theme::breadth(record.market_breadth),
        ),
    ]));

    if !record.top_stocks.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {:<8} {:>10} {:>10} {:>10}", "Symbol", "Price", "Mkt Cap", "Change"),
            theme::accent(),
        )));
        for stock in &record.top_stocks {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8} ", stock.symbol), theme::text()),
                Span::styled(format!("{:>10} ", format::decimal(stock.price)), theme::secondary()),
                Span::styled(
                    format!("{:>10} ", format::market_cap(stock.market_cap)),
                    theme::secondary(),
                ),
                Span::styled(
                    format!("{:>10}", format::change(stock.change_percentage)),
                    theme::change(stock.change_percentage),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));
}
