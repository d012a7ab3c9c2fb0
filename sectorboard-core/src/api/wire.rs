//! JSON shapes served by the backend and their conversion into domain types.
//!
//! The backend is loosely typed: any field may be missing or null, ROI maps
//! may carry labels we do not know, and failures sometimes arrive as a
//! `200 {"error": "..."}` body. Everything here degrades to "absent" rather
//! than failing, except a body with no `data` at all.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::provider::ApiError;
use crate::domain::{IndustryRecord, ReportDocument, RoiHorizon, TopStock};

#[derive(Debug, Deserialize)]
pub struct IndustryDataResponse {
    #[serde(default)]
    pub data: Option<Vec<WireIndustry>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireIndustry {
    pub industry_name: String,
    #[serde(default)]
    pub preview_summary: Option<String>,
    #[serde(default)]
    pub etf_roi: Option<Value>,
    #[serde(default)]
    pub pe_today: Option<f64>,
    #[serde(default)]
    pub pe_low_1y: Option<f64>,
    #[serde(default)]
    pub pe_high_1y: Option<f64>,
    #[serde(default)]
    pub market_breadth: Option<f64>,
    #[serde(default)]
    pub top_stocks: Option<Vec<WireStock>>,
}

#[derive(Debug, Deserialize)]
pub struct WireStock {
    pub symbol: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "marketCap")]
    pub market_cap: Option<f64>,
    #[serde(default, rename = "changePercentage")]
    pub change_percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WireReport {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub generated_at: Option<Value>,
    #[serde(default)]
    pub preview_summary: Option<String>,
    #[serde(default)]
    pub report_part_1: Option<String>,
    #[serde(default)]
    pub report_part_2: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
    error: Option<String>,
}

impl IndustryDataResponse {
    pub fn into_records(self) -> Result<Vec<IndustryRecord>, ApiError> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data.into_iter().map(IndustryRecord::from).collect()),
            (None, Some(err)) => Err(ApiError::Backend(err)),
            (None, None) => Err(ApiError::Decode("response has no 'data' field".into())),
        }
    }
}

impl From<WireIndustry> for IndustryRecord {
    fn from(w: WireIndustry) -> Self {
        IndustryRecord {
            name: w.industry_name,
            preview_summary: w.preview_summary.unwrap_or_default(),
            roi: w.etf_roi.as_ref().map(parse_roi).unwrap_or_default(),
            pe_today: w.pe_today,
            pe_low_1y: w.pe_low_1y,
            pe_high_1y: w.pe_high_1y,
            market_breadth: w.market_breadth,
            top_stocks: w
                .top_stocks
                .unwrap_or_default()
                .into_iter()
                .map(TopStock::from)
                .collect(),
        }
    }
}

impl From<WireStock> for TopStock {
    fn from(w: WireStock) -> Self {
        TopStock {
            symbol: w.symbol,
            price: w.price,
            market_cap: w.market_cap,
            change_percentage: w.change_percentage,
        }
    }
}

impl From<WireReport> for ReportDocument {
    fn from(w: WireReport) -> Self {
        let generated_at = match w.generated_at {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        ReportDocument {
            title: w.title.unwrap_or_default(),
            generated_at,
            summary: w.preview_summary.unwrap_or_default(),
            body_part_1: w.report_part_1.unwrap_or_default(),
            body_part_2: w.report_part_2.unwrap_or_default(),
        }
    }
}

/// Read the ROI object. Unknown labels, nulls and non-numeric values are dropped.
pub fn parse_roi(value: &Value) -> BTreeMap<RoiHorizon, f64> {
    let Value::Object(map) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(label, v)| {
            let horizon = RoiHorizon::from_label(label)?;
            let number = match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }?;
            number.is_finite().then_some((horizon, number))
        })
        .collect()
}

/// Pull a human-readable message out of an error body (`detail` or `error`).
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.detail, parsed.error) {
        (Some(Value::String(s)), _) => Some(s),
        (Some(other), _) if !other.is_null() => Some(other.to_string()),
        (_, Some(err)) => Some(err),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roi_keeps_known_numeric_labels_only() {
        let roi = parse_roi(&json!({
            "1D": 1.5, "5D": null, "1M": "2.25", "2W": 9.0, "1Y": "n/a"
        }));
        assert_eq!(roi.get(&RoiHorizon::OneDay), Some(&1.5));
        assert_eq!(roi.get(&RoiHorizon::OneMonth), Some(&2.25));
        assert_eq!(roi.len(), 2);
    }

    #[test]
    fn roi_of_non_object_is_empty() {
        assert!(parse_roi(&json!([1, 2, 3])).is_empty());
        assert!(parse_roi(&Value::Null).is_empty());
    }

    #[test]
    fn error_detail_prefers_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "No report found"}"#).as_deref(),
            Some("No report found")
        );
        assert_eq!(
            error_detail(r#"{"error": "Firestore client is not available."}"#).as_deref(),
            Some("Firestore client is not available.")
        );
        assert_eq!(error_detail("<html>oops</html>"), None);
    }

    #[test]
    fn error_body_becomes_backend_error() {
        let resp: IndustryDataResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(resp.into_records(), Err(ApiError::Backend("boom".into())));
    }

    #[test]
    fn report_timestamp_accepts_non_string() {
        let w: WireReport = serde_json::from_value(json!({
            "title": "Energy weekly",
            "generated_at": 1761546600
        }))
        .unwrap();
        let doc = ReportDocument::from(w);
        assert_eq!(doc.generated_at, "1761546600");
        assert_eq!(doc.summary, "");
    }
}
