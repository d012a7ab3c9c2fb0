//! Orders industry rows by one column without touching the store.
//!
//! Each sortable column is a [`SortKey`] variant with a fixed extraction
//! function, so the comparator only ever sees a [`SortValue`]. Rows whose
//! value is absent always trail the rows that have one, in both directions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{IndustryRecord, RoiHorizon};

/// Which column the table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Roi(RoiHorizon),
    PeToday,
    MarketBreadth,
}

impl SortKey {
    /// Every sortable column, in table order.
    pub const ALL: [SortKey; 9] = [
        SortKey::Name,
        SortKey::Roi(RoiHorizon::OneDay),
        SortKey::Roi(RoiHorizon::FiveDays),
        SortKey::Roi(RoiHorizon::OneMonth),
        SortKey::Roi(RoiHorizon::ThreeMonths),
        SortKey::Roi(RoiHorizon::SixMonths),
        SortKey::Roi(RoiHorizon::OneYear),
        SortKey::PeToday,
        SortKey::MarketBreadth,
    ];

    /// Resolve this key to a single comparable value for `record`.
    ///
    /// Non-finite numbers resolve to [`SortValue::Absent`].
    pub fn extract(self, record: &IndustryRecord) -> SortValue<'_> {
        let number = match self {
            SortKey::Name => return SortValue::Text(&record.name),
            SortKey::Roi(horizon) => record.roi(horizon),
            SortKey::PeToday => record.pe_today,
            SortKey::MarketBreadth => record.market_breadth,
        };
        match number {
            Some(v) if v.is_finite() => SortValue::Number(v),
            _ => SortValue::Absent,
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Industry",
            SortKey::Roi(h) => h.label(),
            SortKey::PeToday => "P/E",
            SortKey::MarketBreadth => "Breadth",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Absent,
}

impl SortValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, SortValue::Absent)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// The single active sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Configuration after the user selects `key`: the same key flips the
    /// direction, a different key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Locale-aware ordering for display names.
///
/// Case-folded comparison first so "energy" and "Energy" sit together; the
/// exact text only breaks ties between otherwise equal names.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Compare two resolved values under `direction`.
///
/// Absent values are greater than any present value regardless of direction.
pub fn compare_values(a: SortValue<'_>, b: SortValue<'_>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortValue::Absent, SortValue::Absent) => Ordering::Equal,
        (SortValue::Absent, _) => Ordering::Greater,
        (_, SortValue::Absent) => Ordering::Less,
        (SortValue::Text(x), SortValue::Text(y)) => direction.apply(collate(x, y)),
        (SortValue::Number(x), SortValue::Number(y)) => direction.apply(x.total_cmp(&y)),
        // A key resolves to one kind only; mixed kinds are treated as ties.
        _ => Ordering::Equal,
    }
}

/// Produce a fresh ordering of `records` under `config`.
///
/// Stable: equal values keep their input order.
pub fn sort_records<'a>(records: &'a [IndustryRecord], config: SortConfig) -> Vec<&'a IndustryRecord> {
    let mut view: Vec<&IndustryRecord> = records.iter().collect();
    view.sort_by(|a, b| {
        compare_values(config.key.extract(a), config.key.extract(b), config.direction)
    });
    view
}
