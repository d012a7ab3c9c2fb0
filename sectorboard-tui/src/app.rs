//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! each response carries the ticket of the view activation that asked for it
//! and is dropped unless that activation is still the current one.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use sectorboard_core::api::ApiError;
use sectorboard_core::cancel::{ScopeIssuer, ViewScope};
use sectorboard_core::config::DashboardConfig;
use sectorboard_core::dashboard::{DashboardEvent, DashboardState, LoadState};
use sectorboard_core::report_view::{ReportEvent, ReportViewState};
use sectorboard_core::route::Route;
use sectorboard_core::sort::SortKey;
use sectorboard_core::tooltip::{Point, TooltipPositioner};

use crate::layout::{self, Hit};
use crate::worker::{WorkerCommand, WorkerResponse};

const ERROR_HISTORY_CAP: usize = 50;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Data,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Backend => "API",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Other => "ERR",
        }
    }
}

impl From<&ApiError> for ErrorCategory {
    fn from(err: &ApiError) -> Self {
        match err.category() {
            "network" => ErrorCategory::Network,
            "backend" => ErrorCategory::Backend,
            "data" => ErrorCategory::Data,
            _ => ErrorCategory::Other,
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Cursor and scroll positions of the report view.
#[derive(Debug, Clone, Default)]
pub struct ReportCursor {
    pub sidebar: usize,
    pub sidebar_offset: usize,
    pub scroll: u16,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub route: Route,

    // Views
    pub dashboard: DashboardState,
    pub report: Option<ReportViewState>,
    pub cursor: usize,
    pub table_offset: usize,
    pub report_cursor: ReportCursor,
    /// Name of the row under the mouse, if any.
    pub hovered: Option<String>,
    /// Last terminal cell reported by the mouse on the table.
    pub pointer: Option<(u16, u16)>,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    scopes: ScopeIssuer,
    active: Option<ViewScope>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub width: u16,
    pub height: u16,
    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(
        config: DashboardConfig,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        let positioner = TooltipPositioner::new(f64::from(config.tooltip_margin));
        Self {
            running: true,
            route: Route::Dashboard,
            dashboard: DashboardState::new(positioner, 0.0),
            report: None,
            cursor: 0,
            table_offset: 0,
            report_cursor: ReportCursor::default(),
            hovered: None,
            pointer: None,
            worker_tx,
            worker_rx,
            scopes: ScopeIssuer::new(),
            active: None,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            width: 0,
            height: 0,
            config,
        }
    }

    /// Enter `route`: cancel the previous activation and request fresh data.
    pub fn activate(&mut self, route: Route) {
        // Dropping the old scope cancels its in-flight fetch.
        self.active = None;
        let scope = self.scopes.open();
        let (ticket, token) = (scope.ticket(), scope.token());
        self.active = Some(scope);
        info!(route = %route, ?ticket, "view activated");

        let cmd = match &route {
            Route::Dashboard => {
                self.report = None;
                self.hovered = None;
                self.pointer = None;
                self.dashboard.apply(DashboardEvent::Reloaded);
                WorkerCommand::FetchDashboard { ticket, token }
            }
            Route::Report { industry, date } => {
                self.report = Some(ReportViewState::new(industry.clone(), *date));
                self.report_cursor = ReportCursor::default();
                self.hovered = None;
                self.pointer = None;
                self.dashboard.apply(DashboardEvent::PointerLeft);
                WorkerCommand::FetchReport {
                    ticket,
                    token,
                    industry: industry.clone(),
                    date: *date,
                }
            }
        };
        self.route = route;

        if self.worker_tx.send(cmd).is_err() {
            self.push_error(
                ErrorCategory::Other,
                "Background worker is not running".into(),
                self.route.path(),
            );
        }
    }

    /// Re-enter the current route.
    pub fn reload(&mut self) {
        self.activate(self.route.clone());
    }

    /// Open the report for a table row, dated per the configured mode.
    pub fn open_report(&mut self, industry: &str) {
        let route = Route::report_for(industry, self.config.report_date, self.today());
        self.activate(route);
    }

    /// Open the latest report for `industry` (sidebar navigation).
    pub fn open_latest_report(&mut self, industry: &str) {
        self.activate(Route::latest_report(industry));
    }

    pub fn back_to_dashboard(&mut self) {
        self.activate(Route::Dashboard);
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Apply a worker response if it belongs to the active view.
    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        let ticket = resp.ticket();
        if !self.active.as_ref().is_some_and(|scope| scope.owns(ticket)) {
            debug!(?ticket, "stale worker response dropped");
            return;
        }

        match resp {
            WorkerResponse::Dashboard { result, .. } => {
                match &result {
                    Ok(ds) if ds.is_empty() => self.set_warning("Backend returned no industries"),
                    Ok(ds) => self.set_status(format!("Loaded {} industries", ds.industries.len())),
                    Err(err) => self.push_error(err.into(), err.to_string(), "industry data".into()),
                }
                self.dashboard.apply(DashboardEvent::FetchCompleted(result));
                self.clamp_cursor();
                self.refresh_hover();
            }
            WorkerResponse::Report { result, .. } => {
                let Some(report) = self.report.as_ref() else {
                    warn!("report response without a report view");
                    return;
                };
                let context = report.route().path();
                match &result {
                    Ok((doc, _)) => {
                        let title = doc.title.clone();
                        self.set_status(format!("Report loaded: {title}"));
                    }
                    Err(err) => self.push_error(err.into(), err.to_string(), context),
                }
                if let Some(report) = self.report.as_mut() {
                    report.apply(ReportEvent::FetchCompleted(result));
                }
            }
        }
    }

    /// Terminal resized: update the tooltip viewport and keep the cursor visible.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.dashboard.apply(DashboardEvent::ViewportResized {
            height: f64::from(height),
        });
        self.follow_cursor();
        self.refresh_hover();
    }

    /// Rankable rows in the table right now.
    pub fn row_count(&self) -> usize {
        match self.dashboard.load_state() {
            LoadState::Populated(ds) => ds.industries.len(),
            _ => 0,
        }
    }

    /// Name of the row under the keyboard cursor.
    pub fn selected_industry(&self) -> Option<String> {
        self.dashboard.rows().get(self.cursor).map(|r| r.name.clone())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let next = self.cursor.saturating_add_signed(delta).min(count - 1);
        self.cursor = next;
        self.follow_cursor();
    }

    fn clamp_cursor(&mut self) {
        let count = self.row_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.follow_cursor();
    }

    fn follow_cursor(&mut self) {
        let visible = self.table_rows_visible();
        let offset = layout::follow_cursor(self.table_offset, self.cursor, visible);
        if offset != self.table_offset {
            self.table_offset = offset;
            self.refresh_hover();
        }
    }

    /// Select a sort column; the row under a still pointer may change.
    pub fn sort_by(&mut self, key: SortKey) {
        self.dashboard.apply(DashboardEvent::SortRequested(key));
        self.refresh_hover();
    }

    /// Record a mouse position over the table and update the tooltip.
    pub fn pointer_at(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.refresh_hover();
    }

    /// Forget the pointer and close the tooltip.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
        self.hovered = None;
        self.dashboard.apply(DashboardEvent::PointerLeft);
    }

    /// Resolve the last pointer cell against the current table and emit
    /// enter / move / leave so the tooltip matches the row now under it.
    pub fn refresh_hover(&mut self) {
        if self.route != Route::Dashboard {
            return;
        }
        let Some((x, y)) = self.pointer else {
            return;
        };
        let (main, _) = layout::screen(ratatui::layout::Rect::new(0, 0, self.width, self.height));
        let table = layout::dashboard_table(main);
        let name = match layout::hit_dashboard(table, self.table_offset, self.row_count(), x, y) {
            Hit::Row(index) => self.dashboard.rows().get(index).map(|r| r.name.clone()),
            Hit::Benchmark => self.dashboard.benchmark().map(|b| b.name.clone()),
            Hit::Header(_) | Hit::Nothing => None,
        };
        let at = Point::new(f64::from(x), f64::from(y));
        match (self.hovered.take(), name) {
            (Some(prev), Some(name)) if prev == name => {
                self.dashboard.apply(DashboardEvent::PointerMoved { name: name.clone(), at });
                self.hovered = Some(name);
            }
            (_, Some(name)) => {
                self.dashboard.apply(DashboardEvent::PointerEntered { name: name.clone(), at });
                self.hovered = Some(name);
            }
            (Some(_), None) => self.dashboard.apply(DashboardEvent::PointerLeft),
            (None, None) => {}
        }
    }

    /// Table rows that fit in the current terminal.
    pub fn table_rows_visible(&self) -> usize {
        let (main, _) = layout::screen(ratatui::layout::Rect::new(0, 0, self.width, self.height));
        layout::visible_rows(layout::dashboard_table(main))
    }

    /// Move the report sidebar cursor, scrolling the list to keep it visible.
    pub fn move_sidebar(&mut self, delta: isize) {
        let count = self.sidebar_industries().len();
        if count == 0 {
            return;
        }
        let cursor = &mut self.report_cursor;
        cursor.sidebar = cursor.sidebar.saturating_add_signed(delta).min(count - 1);
        let (main, _) = layout::screen(ratatui::layout::Rect::new(0, 0, self.width, self.height));
        let (sidebar, _) = layout::report_panes(main);
        let visible = layout::inner(sidebar).height as usize;
        cursor.sidebar_offset = layout::follow_cursor(cursor.sidebar_offset, cursor.sidebar, visible);
    }

    /// Industries listed in the report sidebar.
    pub fn sidebar_industries(&self) -> Vec<String> {
        self.report
            .as_ref()
            .and_then(|r| r.view())
            .map(|v| v.industries.clone())
            .unwrap_or_default()
    }

    /// Stop the loop and the worker.
    pub fn shutdown(&mut self) {
        self.active = None;
        self.running = false;
        let _ = self.worker_tx.send(WorkerCommand::Shutdown);
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use sectorboard_core::domain::{Dataset, IndustryRecord, ReportDocument};
    use sectorboard_core::report_view::ReportLoad;
    use sectorboard_core::route::ReportDate;

    fn app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let mut app = AppState::new(DashboardConfig::default(), cmd_tx, resp_rx);
        app.resize(120, 40);
        (app, cmd_rx, resp_tx)
    }

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                IndustryRecord::new("S&P 500"),
                IndustryRecord::new("Energy"),
                IndustryRecord::new("Utilities"),
            ],
            "S&P 500",
        )
    }

    fn take_ticket(rx: &Receiver<WorkerCommand>) -> sectorboard_core::cancel::Ticket {
        match rx.try_recv().unwrap() {
            WorkerCommand::FetchDashboard { ticket, .. } => ticket,
            WorkerCommand::FetchReport { ticket, .. } => ticket,
            WorkerCommand::Shutdown => panic!("unexpected shutdown"),
        }
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _rx, _tx) = app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn activation_sends_fetch_and_applies_response() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Dashboard);
        let ticket = take_ticket(&rx);

        app.handle_worker_response(WorkerResponse::Dashboard {
            ticket,
            result: Ok(dataset()),
        });
        assert_eq!(app.row_count(), 2);
        assert_eq!(app.selected_industry().as_deref(), Some("Energy"));
    }

    #[test]
    fn empty_dataset_warns() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Dashboard);
        let ticket = take_ticket(&rx);
        app.handle_worker_response(WorkerResponse::Dashboard {
            ticket,
            result: Ok(Dataset::default()),
        });
        assert_eq!(
            app.status_message,
            Some(("Backend returned no industries".to_string(), StatusLevel::Warning))
        );
        assert_eq!(app.row_count(), 0);
    }

    #[test]
    fn stale_response_is_ignored() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Dashboard);
        let old = take_ticket(&rx);
        app.activate(Route::Dashboard);
        let _new = take_ticket(&rx);

        app.handle_worker_response(WorkerResponse::Dashboard {
            ticket: old,
            result: Ok(dataset()),
        });
        assert_eq!(app.dashboard.load_state(), &LoadState::Loading);
    }

    #[test]
    fn navigation_cancels_previous_fetch() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Dashboard);
        let token = match rx.try_recv().unwrap() {
            WorkerCommand::FetchDashboard { token, .. } => token,
            other => panic!("unexpected {other:?}"),
        };
        app.open_latest_report("Energy");
        assert!(token.is_cancelled());
        assert_eq!(app.route.path(), "/report/Energy/latest");
    }

    #[test]
    fn report_failure_goes_to_history() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Report {
            industry: "Energy".into(),
            date: ReportDate::Latest,
        });
        let ticket = take_ticket(&rx);
        app.handle_worker_response(WorkerResponse::Report {
            ticket,
            result: Err(ApiError::NotFound("missing".into())),
        });

        let report = app.report.as_ref().unwrap();
        assert!(matches!(report.load_state(), ReportLoad::Failed(_)));
        assert_eq!(app.error_history[0].category, ErrorCategory::Backend);
        assert_eq!(app.error_history[0].context, "/report/Energy/latest");
    }

    #[test]
    fn report_success_lists_sidebar() {
        let (mut app, rx, _tx) = app();
        app.open_latest_report("Energy");
        let ticket = take_ticket(&rx);
        app.handle_worker_response(WorkerResponse::Report {
            ticket,
            result: Ok((ReportDocument::default(), dataset())),
        });
        assert_eq!(app.sidebar_industries(), vec!["Energy", "Utilities"]);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let (mut app, rx, _tx) = app();
        app.activate(Route::Dashboard);
        let ticket = take_ticket(&rx);
        app.handle_worker_response(WorkerResponse::Dashboard {
            ticket,
            result: Ok(dataset()),
        });
        app.move_cursor(10);
        assert_eq!(app.cursor, 1);
        app.move_cursor(-10);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn sidebar_cursor_scrolls_list() {
        let (mut app, rx, _tx) = app();
        app.resize(120, 8);
        app.open_latest_report("Energy");
        let ticket = take_ticket(&rx);
        let records = (0..20).map(|i| IndustryRecord::new(format!("Industry {i:02}"))).collect();
        app.handle_worker_response(WorkerResponse::Report {
            ticket,
            result: Ok((ReportDocument::default(), Dataset::from_records(records, "S&P 500"))),
        });

        // 8 rows: 1 status line, 2 borders, leaving 5 visible entries.
        app.move_sidebar(7);
        assert_eq!(app.report_cursor.sidebar, 7);
        assert_eq!(app.report_cursor.sidebar_offset, 3);
        app.move_sidebar(100);
        assert_eq!(app.report_cursor.sidebar, 19);
        app.move_sidebar(-100);
        assert_eq!(app.report_cursor.sidebar_offset, 0);
    }

    #[test]
    fn scrolling_under_still_pointer_moves_tooltip() {
        let (mut app, rx, _tx) = app();
        app.resize(120, 10);
        app.activate(Route::Dashboard);
        let ticket = take_ticket(&rx);
        let records = (0..30)
            .map(|i| IndustryRecord::new(format!("Industry {i:02}")).with_summary(format!("summary {i}")))
            .collect();
        app.handle_worker_response(WorkerResponse::Dashboard {
            ticket,
            result: Ok(Dataset::from_records(records, "S&P 500")),
        });

        // First data row sits below the border and the three preamble lines.
        app.pointer_at(5, 4);
        assert_eq!(app.dashboard.tooltip().unwrap().content, "summary 0");

        // 10 rows leave 4 visible; cursor 5 scrolls the table by 2.
        app.move_cursor(5);
        assert_eq!(app.table_offset, 2);
        assert_eq!(app.hovered.as_deref(), Some("Industry 02"));
        assert_eq!(app.dashboard.tooltip().unwrap().content, "summary 2");
    }

    #[test]
    fn shutdown_sends_command() {
        let (mut app, rx, _tx) = app();
        app.shutdown();
        assert!(!app.running);
        assert!(matches!(rx.try_recv(), Ok(WorkerCommand::Shutdown)));
    }
}
