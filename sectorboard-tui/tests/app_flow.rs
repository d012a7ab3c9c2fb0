//! Full UI flows against the demo backend, with the real worker thread.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use sectorboard_core::api::{ApiError, StaticApi};
use sectorboard_core::config::DashboardConfig;
use sectorboard_core::dashboard::LoadState;
use sectorboard_core::report_view::{ReportLoad, REPORT_FAILURE_MESSAGE};
use sectorboard_core::route::ReportDateMode;

use sectorboard_tui::app::AppState;
use sectorboard_tui::worker::{spawn_worker, WorkerCommand};
use sectorboard_tui::{input, sample_data, ui};

struct Harness {
    app: AppState,
    worker: Option<JoinHandle<()>>,
}

impl Harness {
    fn new(api: StaticApi, config: DashboardConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
        let (resp_tx, resp_rx) = mpsc::channel();
        let worker = spawn_worker(Box::new(api), config.benchmark_name.clone(), cmd_rx, resp_tx).unwrap();
        let mut app = AppState::new(config, cmd_tx, resp_rx);
        app.resize(140, 30);
        Self {
            app,
            worker: Some(worker),
        }
    }

    fn demo() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(sample_data::demo_api(today), DashboardConfig::default())
    }

    /// Block until one worker response arrives and apply it.
    fn settle(&mut self) {
        let resp = self
            .app
            .worker_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker response");
        self.app.handle_worker_response(resp);
    }

    fn key(&mut self, code: KeyCode) {
        input::handle_key(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn row_names(&self) -> Vec<String> {
        self.app.dashboard.rows().iter().map(|r| r.name.clone()).collect()
    }

    fn render(&self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| ui::draw(f, &self.app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.app.shutdown();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[test]
fn dashboard_loads_and_sorts_by_keys() {
    let mut h = Harness::demo();
    h.app.activate(sectorboard_core::route::Route::Dashboard);
    h.settle();

    let names = h.row_names();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "Basic Materials");
    assert!(!names.iter().any(|n| n == sample_data::BENCHMARK));

    // 1D ascending, then descending; the industry without data stays last.
    h.key(KeyCode::Char('2'));
    let names = h.row_names();
    assert_eq!(names[0], "Energy");
    assert_eq!(names.last().map(String::as_str), Some("Semiconductors"));

    h.key(KeyCode::Char('2'));
    let names = h.row_names();
    assert_eq!(names[0], "Technology");
    assert_eq!(names.last().map(String::as_str), Some("Semiconductors"));
}

#[test]
fn enter_opens_todays_report_and_sidebar_opens_latest() {
    let mut h = Harness::demo();
    h.app.activate(sectorboard_core::route::Route::Dashboard);
    h.settle();

    h.key(KeyCode::Enter);
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(h.app.route.path(), format!("/report/Basic%20Materials/{today}"));
    h.settle();
    let report = h.app.report.as_ref().unwrap();
    assert!(matches!(report.load_state(), ReportLoad::Loaded(_)));

    // Sidebar lists industries in fetch order: Technology, then Energy.
    h.key(KeyCode::Char('j'));
    h.key(KeyCode::Enter);
    assert_eq!(h.app.route.path(), "/report/Energy/latest");
    h.settle();
    assert!(h.app.report.as_ref().unwrap().view().is_some());

    h.key(KeyCode::Esc);
    assert_eq!(h.app.route.path(), "/");
    h.settle();
    assert!(matches!(h.app.dashboard.load_state(), LoadState::Populated(_)));
}

#[test]
fn latest_mode_config_routes_to_latest() {
    let today = chrono::Local::now().date_naive();
    let config = DashboardConfig {
        report_date: ReportDateMode::Latest,
        ..DashboardConfig::default()
    };
    let mut h = Harness::new(sample_data::demo_api(today), config);
    h.app.activate(sectorboard_core::route::Route::Dashboard);
    h.settle();
    h.key(KeyCode::Enter);
    assert_eq!(h.app.route.path(), "/report/Basic%20Materials/latest");
}

#[test]
fn failed_fetches_show_messages_and_fill_history() {
    let api = StaticApi::new(sample_data::records())
        .failing_data(ApiError::Network("connection refused".into()))
        .failing_reports(ApiError::NotFound("gone".into()));
    let mut h = Harness::new(api, DashboardConfig::default());
    h.app.activate(sectorboard_core::route::Route::Dashboard);
    h.settle();

    assert!(matches!(h.app.dashboard.load_state(), LoadState::Failed(_)));
    assert_eq!(h.app.error_history.len(), 1);
    let screen = h.render();
    assert!(screen.contains("Could not load industry data"));
    assert!(screen.contains("Press r to reload"));

    h.key(KeyCode::Char('r'));
    assert_eq!(h.app.dashboard.load_state(), &LoadState::Loading);
    h.settle();
    assert_eq!(h.app.error_history.len(), 2);

    h.app.open_latest_report("Energy");
    h.settle();
    let screen = h.render();
    assert!(screen.contains(REPORT_FAILURE_MESSAGE));
}

#[test]
fn rendered_table_shows_benchmark_and_missing_values() {
    let mut h = Harness::demo();
    h.app.activate(sectorboard_core::route::Route::Dashboard);
    h.settle();

    let screen = h.render();
    let lines: Vec<&str> = screen.lines().collect();
    // Border, header, then the pinned benchmark row.
    assert!(lines[1].contains("Industry ▲"));
    assert!(lines[2].contains(sample_data::BENCHMARK));
    assert!(lines.iter().any(|l| l.contains("Semiconductors") && l.contains("N/A")));
    assert!(lines[29].contains("Enter:report"));
}
