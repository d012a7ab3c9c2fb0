//! HTTP backend client.
//!
//! One blocking request per call, no retries: a failed fetch is reported to
//! the view that asked for it and the user decides whether to reload.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::provider::{ApiError, IndustryApi};
use super::wire::{self, IndustryDataResponse, WireReport};
use crate::domain::{IndustryRecord, ReportDocument};
use crate::route::ReportDate;

/// Client for the industry-data REST service.
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    /// Build a client rooted at `base_url` (e.g. `http://localhost:8000/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Decode(format!("invalid base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Decode(format!("invalid base URL '{base_url}'")));
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sectorboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with `segments` appended, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().map_err(|e| {
            warn!(%url, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let detail = wire::error_detail(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!(%url, status = status.as_u16(), %detail, "non-success response");
            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(detail));
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        resp.json::<T>()
            .map_err(|e| ApiError::Decode(format!("failed to parse response from {url}: {e}")))
    }
}

impl IndustryApi for HttpApi {
    fn name(&self) -> &str {
        self.base.as_str()
    }

    fn industry_data(&self) -> Result<Vec<IndustryRecord>, ApiError> {
        let resp: IndustryDataResponse = self.get_json(self.endpoint(&["industry-data"]))?;
        let records = resp.into_records()?;
        debug!(count = records.len(), "industry data received");
        Ok(records)
    }

    fn industry_report(&self, industry: &str, date: ReportDate) -> Result<ReportDocument, ApiError> {
        let token = date.token();
        let url = self.endpoint(&["industry-reports", industry, &token]);
        let report: WireReport = self.get_json(url)?;
        Ok(report.into())
    }
}
