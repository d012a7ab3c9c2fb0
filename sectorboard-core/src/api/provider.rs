//! API trait and structured error types.
//!
//! [`IndustryApi`] abstracts over the remote backend so the front-end can run
//! against the HTTP service, an in-memory fixture, or a test double.

use thiserror::Error;

use crate::domain::{IndustryRecord, ReportDocument};
use crate::route::ReportDate;

/// Errors from a data or report request.
///
/// Messages are displayable as-is in the status bar and error history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Short category tag for the error history.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Status { .. } | ApiError::NotFound(_) | ApiError::Backend(_) => "backend",
            ApiError::Decode(_) => "data",
            ApiError::Cancelled => "cancelled",
        }
    }
}

/// The remote industry-data backend.
pub trait IndustryApi: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// `GET /industry-data`: every industry record, benchmark included.
    fn industry_data(&self) -> Result<Vec<IndustryRecord>, ApiError>;

    /// `GET /industry-reports/{industry}/{date|latest}`.
    fn industry_report(&self, industry: &str, date: ReportDate) -> Result<ReportDocument, ApiError>;
}
