//! Input dispatch: global keys, then overlays, then the active view.
//! Mouse motion updates the pointer cell that drives the tooltip.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use sectorboard_core::route::Route;
use sectorboard_core::sort::SortKey;

use crate::app::{AppState, Overlay};
use crate::layout::{self, Hit};

const PAGE: isize = 10;
const SCROLL_STEP: u16 = 3;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.shutdown();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.error_scroll = 0;
            app.overlay = Overlay::ErrorHistory;
            return;
        }
        KeyCode::Char('r') => {
            app.reload();
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.route {
        Route::Dashboard => handle_dashboard_key(app, key),
        Route::Report { .. } => handle_report_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(PAGE),
        KeyCode::PageUp => app.move_cursor(-PAGE),
        KeyCode::Char('g') | KeyCode::Home => app.move_cursor(isize::MIN),
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),
        KeyCode::Enter => match app.selected_industry() {
            Some(name) => app.open_report(&name),
            None => app.set_warning("No industry selected"),
        },
        // 1-9 pick a column; pressing the same digit again flips direction.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(key) = SortKey::ALL.get(index).copied() {
                app.sort_by(key);
            }
        }
        KeyCode::Esc => app.clear_pointer(),
        _ => {}
    }
}

fn handle_report_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_to_dashboard(),
        KeyCode::Char('j') | KeyCode::Down => app.move_sidebar(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_sidebar(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.report_cursor.scroll = app.report_cursor.scroll.saturating_add(SCROLL_STEP * 4);
        }
        KeyCode::PageUp => {
            app.report_cursor.scroll = app.report_cursor.scroll.saturating_sub(SCROLL_STEP * 4);
        }
        KeyCode::Enter => {
            let target = app.sidebar_industries().get(app.report_cursor.sidebar).cloned();
            if let Some(name) = target {
                app.open_latest_report(&name);
            }
        }
        _ => {}
    }
}

/// Handle a mouse event.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    let (main, _) = layout::screen(Rect::new(0, 0, app.width, app.height));
    match app.route {
        Route::Dashboard => handle_dashboard_mouse(app, main, mouse),
        Route::Report { .. } => handle_report_mouse(app, main, mouse),
    }
}

fn handle_dashboard_mouse(app: &mut AppState, main: Rect, mouse: MouseEvent) {
    let table = layout::dashboard_table(main);
    let hit = layout::hit_dashboard(table, app.table_offset, app.row_count(), mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.pointer_at(mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::Header(key) => app.sort_by(key),
            Hit::Row(index) => {
                app.cursor = index;
                if let Some(name) = app.selected_industry() {
                    app.open_report(&name);
                }
            }
            Hit::Benchmark => {
                if let Some(name) = app.dashboard.benchmark().map(|b| b.name.clone()) {
                    app.open_report(&name);
                }
            }
            Hit::Nothing => {}
        },
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        _ => {}
    }
}

fn handle_report_mouse(app: &mut AppState, main: Rect, mouse: MouseEvent) {
    let (sidebar, _) = layout::report_panes(main);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let industries = app.sidebar_industries();
            let offset = app.report_cursor.sidebar_offset;
            if let Some(index) =
                layout::hit_sidebar(sidebar, offset, industries.len(), mouse.column, mouse.row)
            {
                app.report_cursor.sidebar = index;
                app.open_latest_report(&industries[index]);
            }
        }
        MouseEventKind::ScrollDown => {
            app.report_cursor.scroll = app.report_cursor.scroll.saturating_add(SCROLL_STEP);
        }
        MouseEventKind::ScrollUp => {
            app.report_cursor.scroll = app.report_cursor.scroll.saturating_sub(SCROLL_STEP);
        }
        _ => {}
    }
}
