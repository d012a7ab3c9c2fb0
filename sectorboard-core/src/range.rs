//! Places a current value inside its trailing-year band.

use crate::domain::IndustryRecord;

/// Derived display data for one range bar.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeVisual {
    /// An input is missing or the band has zero width; render a fixed "N/A".
    NotApplicable,
    Band {
        /// Marker position in `[0, 100]`.
        clamped_percent: f64,
        low_label: String,
        high_label: String,
        /// The true, unclamped current value.
        current_label: String,
    },
}

impl RangeVisual {
    pub fn applicable(&self) -> bool {
        matches!(self, RangeVisual::Band { .. })
    }

    pub fn clamped_percent(&self) -> Option<f64> {
        match self {
            RangeVisual::Band { clamped_percent, .. } => Some(*clamped_percent),
            RangeVisual::NotApplicable => None,
        }
    }
}

/// Normalize `current` into the `[low, high]` band.
///
/// Values outside the band are pinned to the nearest edge, but the current
/// label always carries the real value. Inverted bands (`low > high`) are
/// valid input and use the same formula.
pub fn visualize(current: Option<f64>, low: Option<f64>, high: Option<f64>) -> RangeVisual {
    let (Some(current), Some(low), Some(high)) = (finite(current), finite(low), finite(high))
    else {
        return RangeVisual::NotApplicable;
    };
    if low == high {
        return RangeVisual::NotApplicable;
    }

    RangeVisual::Band {
        clamped_percent: percent(current, low, high).clamp(0.0, 100.0),
        low_label: format!("{low:.2}"),
        high_label: format!("{high:.2}"),
        current_label: format!("{current:.2}"),
    }
}

/// Position of `current` in the band, unclamped. Never NaN for finite,
/// distinct `low` and `high`.
fn percent(current: f64, low: f64, high: f64) -> f64 {
    let span = high - low;
    if span.is_finite() {
        (current - low) / span * 100.0
    } else {
        // The span overflowed; halving keeps both differences finite.
        (current / 2.0 - low / 2.0) / (high / 2.0 - low / 2.0) * 100.0
    }
}

/// The P/E band of a record: today's P/E within the trailing-year low/high.
pub fn pe_range(record: &IndustryRecord) -> RangeVisual {
    visualize(record.pe_today, record.pe_low_1y, record.pe_high_1y)
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}
