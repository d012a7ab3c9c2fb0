//! Report view state for one `(industry, date)` activation.

use tracing::warn;

use crate::api::ApiError;
use crate::domain::{Dataset, IndustryRecord, ReportDocument};
use crate::route::{ReportDate, Route};

/// Shown in place of the report when either fetch fails.
pub const REPORT_FAILURE_MESSAGE: &str = "Failed to load the report. Please try again later.";

/// A loaded report plus the navigation context around it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub document: ReportDocument,
    /// Other industries to jump to (benchmark excluded), fetch order.
    pub industries: Vec<String>,
    /// The reported industry's own record, when the data set has it.
    pub record: Option<IndustryRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportLoad {
    Loading,
    Loaded(ReportView),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    /// Both the report and the industry list arrived (or one failed).
    FetchCompleted(Result<(ReportDocument, Dataset), ApiError>),
}

#[derive(Debug, Clone)]
pub struct ReportViewState {
    industry: String,
    date: ReportDate,
    load: ReportLoad,
}

impl ReportViewState {
    pub fn new(industry: impl Into<String>, date: ReportDate) -> Self {
        Self {
            industry: industry.into(),
            date,
            load: ReportLoad::Loading,
        }
    }

    pub fn apply(&mut self, event: ReportEvent) {
        match event {
            ReportEvent::FetchCompleted(Ok((document, dataset))) => {
                let record = dataset.find(&self.industry).cloned();
                let industries = dataset.industries.into_iter().map(|r| r.name).collect();
                self.load = ReportLoad::Loaded(ReportView {
                    document,
                    industries,
                    record,
                });
            }
            ReportEvent::FetchCompleted(Err(err)) => {
                warn!(industry = %self.industry, date = %self.date, error = %err, "report fetch failed");
                self.load = ReportLoad::Failed(REPORT_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn date(&self) -> ReportDate {
        self.date
    }

    pub fn route(&self) -> Route {
        Route::Report {
            industry: self.industry.clone(),
            date: self.date,
        }
    }

    pub fn load_state(&self) -> &ReportLoad {
        &self.load
    }

    pub fn view(&self) -> Option<&ReportView> {
        match &self.load {
            ReportLoad::Loaded(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                IndustryRecord::new("S&P 500"),
                IndustryRecord::new("Energy"),
                IndustryRecord::new("Technology"),
            ],
            "S&P 500",
        )
    }

    #[test]
    fn loaded_view_lists_industries_without_benchmark() {
        let mut state = ReportViewState::new("Energy", ReportDate::Latest);
        let doc = ReportDocument {
            title: "Energy weekly".into(),
            ..ReportDocument::default()
        };
        state.apply(ReportEvent::FetchCompleted(Ok((doc, dataset()))));

        let view = state.view().expect("loaded");
        assert_eq!(view.document.title, "Energy weekly");
        assert_eq!(view.industries, vec!["Energy", "Technology"]);
        assert_eq!(view.record.as_ref().map(|r| r.name.as_str()), Some("Energy"));
    }

    #[test]
    fn failure_shows_generic_message() {
        let mut state = ReportViewState::new("Energy", ReportDate::Latest);
        state.apply(ReportEvent::FetchCompleted(Err(ApiError::NotFound("x".into()))));
        assert_eq!(
            state.load_state(),
            &ReportLoad::Failed(REPORT_FAILURE_MESSAGE.to_string())
        );
        assert!(state.view().is_none());
    }

    #[test]
    fn route_reflects_activation() {
        let state = ReportViewState::new("Energy", ReportDate::Latest);
        assert_eq!(state.route().path(), "/report/Energy/latest");
    }
}
