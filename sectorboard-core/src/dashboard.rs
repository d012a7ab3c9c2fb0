//! Comparison-table view state, driven by named events.
//!
//! All mutation goes through [`DashboardState::apply`], one event at a time.
//! Derived data (the sorted rows, range bars) is recomputed on every read so
//! nothing can go stale between events.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::api::ApiError;
use crate::domain::{Dataset, IndustryRecord};
use crate::sort::{sort_records, SortConfig, SortKey};
use crate::tooltip::{Point, TooltipPositioner, TooltipState};

const EVENT_LOG_CAP: usize = 64;

/// Fetch lifecycle of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Populated(Dataset),
    /// The fetch failed; the message is shown in place of the table.
    Failed(String),
}

/// Everything that can happen to the table view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    FetchCompleted(Result<Dataset, ApiError>),
    SortRequested(SortKey),
    PointerEntered { name: String, at: Point },
    PointerMoved { name: String, at: Point },
    PointerLeft,
    ViewportResized { height: f64 },
    Reloaded,
}

impl DashboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::FetchCompleted(Ok(_)) => "fetchCompleted",
            DashboardEvent::FetchCompleted(Err(_)) => "fetchFailed",
            DashboardEvent::SortRequested(_) => "sortRequested",
            DashboardEvent::PointerEntered { .. } => "pointerEntered",
            DashboardEvent::PointerMoved { .. } => "pointerMoved",
            DashboardEvent::PointerLeft => "pointerLeft",
            DashboardEvent::ViewportResized { .. } => "viewportResized",
            DashboardEvent::Reloaded => "reloaded",
        }
    }
}

/// State of the comparison-table view.
#[derive(Debug, Clone)]
pub struct DashboardState {
    load: LoadState,
    sort: SortConfig,
    tooltip: Option<TooltipState>,
    positioner: TooltipPositioner,
    viewport_height: f64,
    log: VecDeque<&'static str>,
}

impl DashboardState {
    pub fn new(positioner: TooltipPositioner, viewport_height: f64) -> Self {
        Self {
            load: LoadState::Loading,
            sort: SortConfig::default(),
            tooltip: None,
            positioner,
            viewport_height,
            log: VecDeque::with_capacity(EVENT_LOG_CAP),
        }
    }

    /// Process one event.
    pub fn apply(&mut self, event: DashboardEvent) {
        debug!(event = event.name(), "dashboard event");
        self.record(event.name());

        match event {
            DashboardEvent::FetchCompleted(Ok(dataset)) => {
                self.load = LoadState::Populated(dataset);
            }
            DashboardEvent::FetchCompleted(Err(err)) => {
                warn!(error = %err, "industry data fetch failed");
                self.load = LoadState::Failed(err.to_string());
                self.tooltip = None;
            }
            DashboardEvent::SortRequested(key) => {
                self.sort = self.sort.toggled(key);
            }
            DashboardEvent::PointerEntered { name, at } | DashboardEvent::PointerMoved { name, at } => {
                self.tooltip = self.tooltip_for(&name, at);
            }
            DashboardEvent::PointerLeft => {
                self.tooltip = None;
            }
            DashboardEvent::ViewportResized { height } => {
                self.viewport_height = height;
            }
            DashboardEvent::Reloaded => {
                self.load = LoadState::Loading;
                self.tooltip = None;
            }
        }
    }

    fn tooltip_for(&self, name: &str, at: Point) -> Option<TooltipState> {
        let record = self.dataset()?.find(name)?;
        if record.preview_summary.trim().is_empty() {
            return None;
        }
        let placement = self.positioner.position(at, self.viewport_height);
        Some(TooltipState::new(record.preview_summary.clone(), placement))
    }

    fn record(&mut self, name: &'static str) {
        if self.log.len() == EVENT_LOG_CAP {
            self.log.pop_front();
        }
        self.log.push_back(name);
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.load {
            LoadState::Populated(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    pub fn benchmark(&self) -> Option<&IndustryRecord> {
        self.dataset().and_then(|ds| ds.benchmark.as_ref())
    }

    /// Rankable rows under the active sort, freshly ordered.
    pub fn rows(&self) -> Vec<&IndustryRecord> {
        match self.dataset() {
            Some(ds) => sort_records(&ds.industries, self.sort),
            None => Vec::new(),
        }
    }

    /// Names of the processed events, oldest first (last 64).
    pub fn event_log(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.log.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoiHorizon;
    use crate::sort::SortDirection;
    use crate::tooltip::VerticalAnchor;

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                IndustryRecord::new("S&P 500").with_summary("Broad market"),
                IndustryRecord::new("Energy")
                    .with_summary("Oil rallies")
                    .with_roi(RoiHorizon::OneDay, 1.0),
                IndustryRecord::new("Utilities").with_roi(RoiHorizon::OneDay, -0.5),
            ],
            "S&P 500",
        )
    }

    fn populated() -> DashboardState {
        let mut state = DashboardState::new(TooltipPositioner::new(2.0), 40.0);
        state.apply(DashboardEvent::FetchCompleted(Ok(dataset())));
        state
    }

    #[test]
    fn starts_loading_with_default_sort() {
        let state = DashboardState::new(TooltipPositioner::default(), 40.0);
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert_eq!(state.sort(), SortConfig::default());
        assert!(state.rows().is_empty());
    }

    #[test]
    fn fetch_failure_is_explicit() {
        let mut state = DashboardState::new(TooltipPositioner::default(), 40.0);
        state.apply(DashboardEvent::FetchCompleted(Err(ApiError::Network("refused".into()))));
        match state.load_state() {
            LoadState::Failed(msg) => assert!(msg.contains("refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn benchmark_is_not_ranked() {
        let state = populated();
        let names: Vec<&str> = state.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Energy", "Utilities"]);
        assert_eq!(state.benchmark().map(|b| b.name.as_str()), Some("S&P 500"));
    }

    #[test]
    fn sort_requests_toggle() {
        let mut state = populated();
        let key = SortKey::Roi(RoiHorizon::OneDay);
        state.apply(DashboardEvent::SortRequested(key));
        assert_eq!(state.sort(), SortConfig::new(key, SortDirection::Ascending));
        assert_eq!(state.rows()[0].name, "Utilities");

        state.apply(DashboardEvent::SortRequested(key));
        assert_eq!(state.sort().direction, SortDirection::Descending);
        assert_eq!(state.rows()[0].name, "Energy");
    }

    #[test]
    fn hover_shows_summary_and_leave_clears() {
        let mut state = populated();
        state.apply(DashboardEvent::PointerEntered {
            name: "Energy".into(),
            at: Point::new(5.0, 35.0),
        });
        let tip = state.tooltip().expect("tooltip");
        assert_eq!(tip.content, "Oil rallies");
        assert_eq!(tip.vertical, VerticalAnchor::Up);

        state.apply(DashboardEvent::PointerMoved {
            name: "Energy".into(),
            at: Point::new(5.0, 3.0),
        });
        assert_eq!(state.tooltip().unwrap().vertical, VerticalAnchor::Down);

        state.apply(DashboardEvent::PointerLeft);
        assert!(state.tooltip().is_none());
    }

    #[test]
    fn empty_summary_shows_no_tooltip() {
        let mut state = populated();
        state.apply(DashboardEvent::PointerEntered {
            name: "Utilities".into(),
            at: Point::new(1.0, 1.0),
        });
        assert!(state.tooltip().is_none());
    }

    #[test]
    fn benchmark_row_is_hoverable() {
        let mut state = populated();
        state.apply(DashboardEvent::PointerEntered {
            name: "S&P 500".into(),
            at: Point::new(1.0, 1.0),
        });
        assert_eq!(state.tooltip().unwrap().content, "Broad market");
    }

    #[test]
    fn reload_returns_to_loading() {
        let mut state = populated();
        state.apply(DashboardEvent::Reloaded);
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert!(state.tooltip().is_none());
    }

    #[test]
    fn event_log_is_bounded() {
        let mut state = populated();
        for _ in 0..100 {
            state.apply(DashboardEvent::PointerLeft);
        }
        let log: Vec<&str> = state.event_log().collect();
        assert_eq!(log.len(), EVENT_LOG_CAP);
        assert!(log.iter().all(|e| *e == "pointerLeft"));
    }
}
