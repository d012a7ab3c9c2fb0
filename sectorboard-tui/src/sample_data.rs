//! Offline demo data for `--demo`.
//!
//! A dozen industries plus the benchmark, with a few deliberately missing
//! figures so the `N/A` rendering and the absent-last sort are visible, and
//! a report archive covering today and the previous two days.

use chrono::{Days, NaiveDate};

use sectorboard_core::api::StaticApi;
use sectorboard_core::domain::{IndustryRecord, ReportDocument, RoiHorizon, TopStock};

pub const BENCHMARK: &str = "S&P 500";

type Roi = [Option<f64>; 6];

struct Row {
    name: &'static str,
    summary: &'static str,
    roi: Roi,
    pe: (Option<f64>, Option<f64>, Option<f64>),
    breadth: Option<f64>,
    stocks: &'static [(&'static str, f64, f64, f64)],
}

const ROWS: &[Row] = &[
    Row {
        name: BENCHMARK,
        summary: "",
        roi: [Some(0.42), Some(1.10), Some(2.35), Some(5.80), Some(9.12), Some(18.40)],
        pe: (Some(24.1), Some(20.3), Some(25.6)),
        breadth: Some(58.0),
        stocks: &[],
    },
    Row {
        name: "Technology",
        summary: "Semiconductor strength carries the group as AI capex guidance is raised again.",
        roi: [Some(1.21), Some(2.84), Some(4.10), Some(9.75), Some(16.30), Some(31.20)],
        pe: (Some(34.8), Some(27.1), Some(36.2)),
        breadth: Some(71.5),
        stocks: &[
            ("NVDA", 186.26, 4.53e12, 2.81),
            ("MSFT", 531.52, 3.95e12, 0.94),
            ("AAPL", 268.81, 3.99e12, -0.37),
        ],
    },
    Row {
        name: "Energy",
        summary: "Crude rebounds on supply discipline; integrated majors lag refiners.",
        roi: [Some(-0.85), Some(1.02), Some(-2.40), Some(3.15), Some(-4.60), Some(-6.10)],
        pe: (Some(14.9), Some(11.2), Some(16.8)),
        breadth: Some(44.0),
        stocks: &[
            ("XOM", 112.40, 4.79e11, -0.82),
            ("CVX", 154.10, 2.68e11, -1.15),
        ],
    },
    Row {
        name: "Utilities",
        summary: "Power demand from data centers keeps the defensive group bid.",
        roi: [Some(0.12), Some(0.65), Some(3.90), Some(8.20), Some(12.75), Some(22.90)],
        pe: (Some(21.3), Some(16.4), Some(20.9)),
        breadth: Some(66.0),
        stocks: &[("NEE", 84.12, 1.73e11, 0.44)],
    },
    Row {
        name: "Financial Services",
        summary: "Steeper curve supports net interest margins ahead of earnings.",
        roi: [Some(0.55), Some(1.75), Some(1.20), Some(4.35), Some(10.40), Some(24.10)],
        pe: (Some(17.6), Some(14.0), Some(18.9)),
        breadth: Some(61.2),
        stocks: &[
            ("JPM", 300.44, 8.24e11, 0.61),
            ("V", 345.90, 6.70e11, 0.18),
        ],
    },
    Row {
        name: "Healthcare",
        summary: "Drug pricing headlines weigh on large caps; medtech holds up.",
        roi: [Some(-0.31), Some(-1.20), Some(-0.80), Some(1.40), Some(-3.25), Some(-2.05)],
        pe: (Some(18.2), Some(17.1), Some(22.5)),
        breadth: Some(38.4),
        stocks: &[("LLY", 812.30, 7.69e11, -1.92)],
    },
    Row {
        name: "Consumer Cyclical",
        summary: "Retail sales beat; autos soft on tariff uncertainty.",
        roi: [Some(0.74), Some(2.05), Some(3.30), Some(6.60), Some(8.15), Some(15.40)],
        pe: (Some(28.4), Some(22.9), Some(29.8)),
        breadth: Some(52.7),
        stocks: &[
            ("AMZN", 224.21, 2.39e12, 1.12),
            ("TSLA", 452.42, 1.50e12, -2.46),
        ],
    },
    Row {
        name: "Consumer Defensive",
        summary: "Staples drift lower as investors rotate into growth.",
        roi: [Some(-0.22), Some(-0.54), Some(-1.90), Some(-2.70), Some(0.35), Some(4.80)],
        pe: (Some(22.0), Some(20.5), Some(24.7)),
        breadth: None,
        stocks: &[("WMT", 101.66, 8.11e11, -0.12)],
    },
    Row {
        name: "Industrials",
        summary: "Aerospace backlog at record levels; transports mixed.",
        roi: [Some(0.38), Some(1.44), Some(2.10), Some(5.25), Some(11.60), Some(17.30)],
        pe: (Some(25.5), Some(20.7), Some(26.1)),
        breadth: Some(57.9),
        stocks: &[("GE", 301.05, 3.19e11, 0.73)],
    },
    Row {
        name: "Basic Materials",
        summary: "Gold miners extend gains while chemicals stay weak.",
        roi: [Some(1.05), None, Some(5.80), Some(7.45), None, Some(9.95)],
        pe: (Some(19.8), None, Some(23.0)),
        breadth: Some(49.3),
        stocks: &[("LIN", 458.90, 2.15e11, 0.27)],
    },
    Row {
        name: "Real Estate",
        summary: "Rate-cut expectations lift REITs off their lows.",
        roi: [Some(0.66), Some(1.92), Some(-0.45), Some(2.80), Some(3.10), Some(-1.25)],
        pe: (Some(35.0), Some(35.0), Some(35.0)),
        breadth: Some(47.8),
        stocks: &[("PLD", 121.40, 1.13e11, 0.95)],
    },
    Row {
        name: "Communication Services",
        summary: "Ad spending recovery broadens beyond the largest platforms.",
        roi: [Some(0.91), Some(2.37), Some(4.65), Some(10.20), Some(19.85), Some(34.50)],
        pe: (Some(21.7), Some(17.9), Some(23.3)),
        breadth: Some(63.1),
        stocks: &[
            ("GOOGL", 269.27, 3.26e12, 1.44),
            ("META", 750.82, 1.89e12, 0.58),
        ],
    },
    Row {
        name: "Semiconductors",
        summary: "",
        roi: [None, None, None, None, None, None],
        pe: (None, None, None),
        breadth: None,
        stocks: &[],
    },
];

fn record(row: &Row) -> IndustryRecord {
    let mut record = IndustryRecord::new(row.name)
        .with_summary(row.summary)
        .with_pe(row.pe.0, row.pe.1, row.pe.2);
    for (horizon, value) in RoiHorizon::ALL.into_iter().zip(row.roi) {
        if let Some(value) = value {
            record = record.with_roi(horizon, value);
        }
    }
    record.market_breadth = row.breadth;
    record.top_stocks = row
        .stocks
        .iter()
        .map(|&(symbol, price, cap, change)| TopStock {
            symbol: symbol.to_string(),
            price: Some(price),
            market_cap: Some(cap),
            change_percentage: Some(change),
        })
        .collect();
    record
}

/// Every demo record, benchmark first.
pub fn records() -> Vec<IndustryRecord> {
    ROWS.iter().map(record).collect()
}

fn report(row: &Row, day: NaiveDate) -> ReportDocument {
    let one_year = row.roi[5].map_or("n/a".to_string(), |v| format!("{v:+.2}%"));
    ReportDocument {
        title: format!("{} Industry Report", row.name),
        generated_at: format!("{}T06:00:00Z", day.format("%Y-%m-%d")),
        summary: row.summary.to_string(),
        body_part_1: format!(
            "{} returned {} over the last year.\nValuation is compared with its one-year P/E band below.",
            row.name, one_year
        ),
        body_part_2: "Positioning remains balanced. Watch breadth for confirmation of the trend."
            .to_string(),
    }
}

/// Demo backend. Reports exist for `today` and the two days before, except
/// for industries without a summary.
pub fn demo_api(today: NaiveDate) -> StaticApi {
    let mut api = StaticApi::new(records());
    for row in ROWS.iter().filter(|r| r.name != BENCHMARK && !r.summary.is_empty()) {
        for back in 0..3 {
            if let Some(day) = today.checked_sub_days(Days::new(back)) {
                api = api.with_report(row.name, day, report(row, day));
            }
        }
    }
    api
}
