//! In-memory backend for tests and offline demos.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::provider::{ApiError, IndustryApi};
use crate::domain::{IndustryRecord, ReportDocument};
use crate::route::ReportDate;

/// Serves a fixed record set and a per-industry archive of dated reports.
#[derive(Debug, Clone, Default)]
pub struct StaticApi {
    records: Vec<IndustryRecord>,
    reports: BTreeMap<String, BTreeMap<NaiveDate, ReportDocument>>,
    data_error: Option<ApiError>,
    report_error: Option<ApiError>,
}

impl StaticApi {
    pub fn new(records: Vec<IndustryRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn with_report(mut self, industry: &str, date: NaiveDate, report: ReportDocument) -> Self {
        self.reports
            .entry(industry.to_string())
            .or_default()
            .insert(date, report);
        self
    }

    /// Make every `industry_data` call fail with `err`.
    pub fn failing_data(mut self, err: ApiError) -> Self {
        self.data_error = Some(err);
        self
    }

    /// Make every `industry_report` call fail with `err`.
    pub fn failing_reports(mut self, err: ApiError) -> Self {
        self.report_error = Some(err);
        self
    }
}

impl IndustryApi for StaticApi {
    fn name(&self) -> &str {
        "static"
    }

    fn industry_data(&self) -> Result<Vec<IndustryRecord>, ApiError> {
        match &self.data_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.clone()),
        }
    }

    fn industry_report(&self, industry: &str, date: ReportDate) -> Result<ReportDocument, ApiError> {
        if let Some(err) = &self.report_error {
            return Err(err.clone());
        }
        let archive = self.reports.get(industry);
        let found = match date {
            ReportDate::Latest => archive.and_then(|a| a.values().next_back()),
            ReportDate::On(day) => archive.and_then(|a| a.get(&day)),
        };
        found.cloned().ok_or_else(|| {
            ApiError::NotFound(format!("Report for industry '{industry}' on date '{date}' not found."))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(title: &str) -> ReportDocument {
        ReportDocument {
            title: title.into(),
            ..ReportDocument::default()
        }
    }

    #[test]
    fn latest_picks_newest_date() {
        let d1 = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
        let api = StaticApi::new(vec![])
            .with_report("Energy", d2, report("new"))
            .with_report("Energy", d1, report("old"));

        assert_eq!(api.industry_report("Energy", ReportDate::Latest).unwrap().title, "new");
        assert_eq!(api.industry_report("Energy", ReportDate::On(d1)).unwrap().title, "old");
    }

    #[test]
    fn unknown_report_is_not_found() {
        let api = StaticApi::new(vec![]);
        assert!(matches!(
            api.industry_report("Energy", ReportDate::Latest),
            Err(ApiError::NotFound(_))
        ));
    }
}
