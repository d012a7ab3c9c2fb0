//! Navigation routes: the comparison table and per-industry reports.
//!
//! `/` is the table; `/report/{industry}/{YYYY-MM-DD|latest}` is a report.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde::{Deserialize, Serialize};

const LATEST: &str = "latest";
const ROUTE_BASE: &str = "http://route.invalid/";

/// Which report edition to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportDate {
    Latest,
    On(NaiveDate),
}

impl ReportDate {
    /// Path token: `latest` or `YYYY-MM-DD`.
    pub fn token(&self) -> String {
        match self {
            ReportDate::Latest => LATEST.to_string(),
            ReportDate::On(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for ReportDate {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(LATEST) {
            return Ok(ReportDate::Latest);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ReportDate::On)
            .map_err(|_| RouteError::BadDate(s.to_string()))
    }
}

/// How a row selection picks the report edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportDateMode {
    /// Today's edition (the table's click-through default).
    #[default]
    Today,
    Latest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),

    #[error("invalid report date '{0}' (expected YYYY-MM-DD or 'latest')")]
    BadDate(String),
}

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Report { industry: String, date: ReportDate },
}

impl Route {
    /// Route for a row selected in the table.
    pub fn report_for(industry: &str, mode: ReportDateMode, today: NaiveDate) -> Self {
        let date = match mode {
            ReportDateMode::Today => ReportDate::On(today),
            ReportDateMode::Latest => ReportDate::Latest,
        };
        Route::Report {
            industry: industry.to_string(),
            date,
        }
    }

    /// Route to the latest report (sidebar navigation).
    pub fn latest_report(industry: &str) -> Self {
        Route::Report {
            industry: industry.to_string(),
            date: ReportDate::Latest,
        }
    }

    /// Percent-encoded path.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Report { industry, date } => {
                let mut url = match Url::parse(ROUTE_BASE) {
                    Ok(url) => url,
                    Err(_) => return format!("/report/{industry}/{date}"),
                };
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.clear().push("report").push(industry).push(&date.token());
                }
                url.path().to_string()
            }
        }
    }

    /// Parse a path produced by [`Route::path`] (or typed by hand).
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Dashboard);
        }
        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["report", industry, date] if !industry.is_empty() => Ok(Route::Report {
                industry: percent_decode(industry),
                date: date.parse()?,
            }),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn percent_decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
