//! Sectorboard terminal dashboard.
//!
//! Views:
//! 1. Table: industries ranked by any column, benchmark pinned on top
//! 2. Report: one industry's dated report, sidebar of the others

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use sectorboard_core::api::{HttpApi, IndustryApi};
use sectorboard_core::config::DashboardConfig;
use sectorboard_core::route::Route;

use sectorboard_tui::app::AppState;
use sectorboard_tui::worker::{spawn_worker, WorkerCommand};
use sectorboard_tui::{input, sample_data, telemetry, ui};

#[derive(Parser)]
#[command(name = "sectorboard", about = "Industry comparison dashboard")]
struct Args {
    /// Config file (default: <config dir>/sectorboard/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides config and environment
    #[arg(long)]
    api_url: Option<String>,

    /// Serve built-in sample data instead of calling the backend
    #[arg(long)]
    demo: bool,
}

fn load_config(args: &Args) -> Result<DashboardConfig> {
    let config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => {
            let path = dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sectorboard")
                .join("config.toml");
            DashboardConfig::load_or_default(&path)?
        }
    };
    let mut config = config.with_env(|name| std::env::var(name).ok())?;
    if let Some(url) = &args.api_url {
        config.api_base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args).context("loading configuration")?;
    let log_path = telemetry::init(&config)?;
    info!(log = %log_path.display(), demo = args.demo, "starting");

    let api: Box<dyn IndustryApi> = if args.demo {
        Box::new(sample_data::demo_api(chrono::Local::now().date_naive()))
    } else {
        let http = HttpApi::new(&config.api_base_url, config.request_timeout())?;
        info!(base = %http.base_url(), "using remote backend");
        Box::new(http)
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = spawn_worker(api, config.benchmark_name.clone(), cmd_rx, resp_tx)?;

    let mut app = AppState::new(config, cmd_tx.clone(), resp_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.activate(Route::Dashboard);

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    info!("stopped");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            app.handle_worker_response(resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
