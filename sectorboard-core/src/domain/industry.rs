//! Industry records, one per row of the comparison table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// ROI horizons reported for every industry, shortest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoiHorizon {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "5D")]
    FiveDays,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl RoiHorizon {
    pub const ALL: [RoiHorizon; 6] = [
        RoiHorizon::OneDay,
        RoiHorizon::FiveDays,
        RoiHorizon::OneMonth,
        RoiHorizon::ThreeMonths,
        RoiHorizon::SixMonths,
        RoiHorizon::OneYear,
    ];

    /// Wire/display label (`1D`, `5D`, ...).
    pub fn label(self) -> &'static str {
        match self {
            RoiHorizon::OneDay => "1D",
            RoiHorizon::FiveDays => "5D",
            RoiHorizon::OneMonth => "1M",
            RoiHorizon::ThreeMonths => "3M",
            RoiHorizon::SixMonths => "6M",
            RoiHorizon::OneYear => "1Y",
        }
    }

    /// Parse a wire label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for RoiHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A constituent shown in the report sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStock {
    pub symbol: String,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub change_percentage: Option<f64>,
}

/// One industry row.
///
/// Every numeric field is optional: absent means "not computed yet" and is
/// rendered differently from zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndustryRecord {
    pub name: String,
    pub preview_summary: String,
    pub roi: BTreeMap<RoiHorizon, f64>,
    pub pe_today: Option<f64>,
    pub pe_low_1y: Option<f64>,
    pub pe_high_1y: Option<f64>,
    pub market_breadth: Option<f64>,
    pub top_stocks: Vec<TopStock>,
}

impl IndustryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// ROI for a horizon, if computed.
    pub fn roi(&self, horizon: RoiHorizon) -> Option<f64> {
        self.roi.get(&horizon).copied()
    }

    pub fn with_roi(mut self, horizon: RoiHorizon, value: f64) -> Self {
        self.roi.insert(horizon, value);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.preview_summary = summary.into();
        self
    }

    pub fn with_pe(mut self, today: Option<f64>, low: Option<f64>, high: Option<f64>) -> Self {
        self.pe_today = today;
        self.pe_low_1y = low;
        self.pe_high_1y = high;
        self
    }

    pub fn with_breadth(mut self, breadth: f64) -> Self {
        self.market_breadth = Some(breadth);
        self
    }
}
