//! Display formatting for optional numeric fields.

/// Text shown wherever a value is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Signed percentage with two decimals, `N/A` when absent or non-finite.
pub fn signed_percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:+.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Unsigned percentage with one decimal (market breadth).
pub fn percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.1}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Plain two-decimal number.
pub fn decimal(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.2}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Market capitalisation scaled to T / B / M.
pub fn market_cap(value: Option<f64>) -> String {
    let Some(cap) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    const T: f64 = 1_000_000_000_000.0;
    const B: f64 = 1_000_000_000.0;
    const M: f64 = 1_000_000.0;
    if cap >= T {
        format!("{:.2}T", cap / T)
    } else if cap >= B {
        format!("{:.2}B", cap / B)
    } else if cap >= M {
        format!("{:.2}M", cap / M)
    } else {
        format!("{cap:.0}")
    }
}

/// Change arrow and magnitude, e.g. `▲1.25%`.
pub fn change(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) if v >= 0.0 => format!("▲{v:.2}%"),
        Some(v) => format!("▼{:.2}%", v.abs()),
        None => NOT_AVAILABLE.to_string(),
    }
}
