//! Industry report documents.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A generated industry report as served by the report endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    /// Generation timestamp exactly as delivered (may be empty).
    pub generated_at: String,
    pub summary: String,
    pub body_part_1: String,
    pub body_part_2: String,
}

impl ReportDocument {
    /// Calendar date of `generated_at`, when it is a recognizable timestamp.
    ///
    /// Accepts RFC 3339 (`2025-10-27T06:30:00+00:00`), naive ISO timestamps
    /// with or without fractional seconds, and plain `YYYY-MM-DD`.
    pub fn generated_on(&self) -> Option<NaiveDate> {
        let raw = self.generated_at.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt.date());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}
