//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Everything here is pure arithmetic on [`Rect`]s so the renderer and the
//! input handler always agree on where a header, row or sidebar entry is.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use sectorboard_core::domain::RoiHorizon;
use sectorboard_core::sort::SortKey;

/// Table rows above the first rankable row: header, benchmark, rule.
pub const TABLE_PREAMBLE: u16 = 3;

/// Width of the report sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 30;

/// Minimum width given to the P/E range column.
const MIN_RANGE_WIDTH: u16 = 24;

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Sort(SortKey),
    /// Trailing-year P/E band; display only.
    PeRange,
}

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Sort(key) => key.label(),
            Column::PeRange => "P/E 1Y range",
        }
    }
}

const FIXED_COLUMNS: [(Column, u16); 9] = [
    (Column::Sort(SortKey::Name), 24),
    (Column::Sort(SortKey::Roi(RoiHorizon::OneDay)), 9),
    (Column::Sort(SortKey::Roi(RoiHorizon::FiveDays)), 9),
    (Column::Sort(SortKey::Roi(RoiHorizon::OneMonth)), 9),
    (Column::Sort(SortKey::Roi(RoiHorizon::ThreeMonths)), 9),
    (Column::Sort(SortKey::Roi(RoiHorizon::SixMonths)), 9),
    (Column::Sort(SortKey::Roi(RoiHorizon::OneYear)), 9),
    (Column::Sort(SortKey::PeToday), 8),
    (Column::Sort(SortKey::MarketBreadth), 9),
];

/// A column's horizontal extent, absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub column: Column,
    pub x: u16,
    pub width: u16,
}

/// Lay the table columns out across `table`. Columns that do not fit are
/// dropped from the right; the range column takes what is left.
pub fn column_spans(table: Rect) -> Vec<ColumnSpan> {
    let mut spans = Vec::with_capacity(FIXED_COLUMNS.len() + 1);
    let right = table.x.saturating_add(table.width);
    let mut x = table.x;
    for (column, width) in FIXED_COLUMNS {
        if x.saturating_add(width) > right {
            return spans;
        }
        spans.push(ColumnSpan { column, x, width });
        x += width;
    }
    let remaining = right - x;
    if remaining >= MIN_RANGE_WIDTH {
        spans.push(ColumnSpan {
            column: Column::PeRange,
            x,
            width: remaining,
        });
    }
    spans
}

/// Main area and the one-line status bar below it.
pub fn screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Inside of a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Table region of the dashboard for a given main area.
pub fn dashboard_table(main: Rect) -> Rect {
    inner(main)
}

/// How many rankable rows fit below the preamble.
pub fn visible_rows(table: Rect) -> usize {
    table.height.saturating_sub(TABLE_PREAMBLE) as usize
}

/// Sidebar and document areas of the report view.
pub fn report_panes(main: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(main);
    (chunks[0], chunks[1])
}

/// What sits under a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Header(SortKey),
    Benchmark,
    /// Index into the sorted rows (scroll offset already applied).
    Row(usize),
    Nothing,
}

/// Resolve a dashboard cell.
pub fn hit_dashboard(table: Rect, offset: usize, row_count: usize, x: u16, y: u16) -> Hit {
    if !contains(table, x, y) {
        return Hit::Nothing;
    }
    let line = y - table.y;
    match line {
        0 => column_spans(table)
            .into_iter()
            .find(|s| x >= s.x && x < s.x + s.width)
            .and_then(|s| match s.column {
                Column::Sort(key) => Some(Hit::Header(key)),
                Column::PeRange => None,
            })
            .unwrap_or(Hit::Nothing),
        1 => Hit::Benchmark,
        2 => Hit::Nothing,
        _ => {
            let index = offset + (line - TABLE_PREAMBLE) as usize;
            if index < row_count {
                Hit::Row(index)
            } else {
                Hit::Nothing
            }
        }
    }
}

/// Resolve a report sidebar cell to an entry index.
pub fn hit_sidebar(sidebar: Rect, offset: usize, count: usize, x: u16, y: u16) -> Option<usize> {
    let list = inner(sidebar);
    if !contains(list, x, y) {
        return None;
    }
    let index = offset + (y - list.y) as usize;
    (index < count).then_some(index)
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Scroll offset that keeps `cursor` inside a window of `visible` rows.
pub fn follow_cursor(offset: usize, cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    if cursor < offset {
        cursor
    } else if cursor >= offset + visible {
        cursor + 1 - visible
    } else {
        offset
    }
}
