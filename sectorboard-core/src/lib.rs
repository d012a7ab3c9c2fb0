//! SectorBoard core: industry data model, the presentation engines, view state.
//!
//! This crate has no terminal dependencies:
//! - Domain types (industry records, the data store, report documents)
//! - Sort engine with absent-last ordering and direction toggling
//! - Range visualizer for the trailing-year P/E band
//! - Tooltip positioner that flips above the pointer in the lower half
//! - Event-driven state containers for the dashboard and report views
//! - Route model, scoped cancellation, the remote API client, config

pub mod api;
pub mod cancel;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod format;
pub mod range;
pub mod report_view;
pub mod route;
pub mod sort;
pub mod tooltip;
