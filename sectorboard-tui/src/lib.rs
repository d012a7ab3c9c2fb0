//! Sectorboard TUI: terminal front end for the industry dashboard.
//!
//! - Sortable industry comparison table with a pinned benchmark row
//! - Hover summaries that open away from the nearer screen edge
//! - One-year P/E range bars
//! - Per-industry reports with a sidebar for jumping between industries

pub mod app;
pub mod input;
pub mod layout;
pub mod sample_data;
pub mod telemetry;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use theme::Theme;
