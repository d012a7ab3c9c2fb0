//! Criterion benchmarks for the per-frame derivations.
//!
//! Benchmarks:
//! 1. Sorting the industry table by every column
//! 2. Range visuals for a full table
//! 3. Wire decoding of an industry-data payload

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sectorboard_core::api::wire::IndustryDataResponse;
use sectorboard_core::domain::{IndustryRecord, RoiHorizon};
use sectorboard_core::range::pe_range;
use sectorboard_core::sort::{sort_records, SortConfig, SortDirection, SortKey};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_records(n: usize) -> Vec<IndustryRecord> {
    (0..n)
        .map(|i| {
            let mut rec = IndustryRecord::new(format!("Industry {i:04}"))
                .with_summary("Summary text for the hover overlay");
            for (h, horizon) in RoiHorizon::ALL.into_iter().enumerate() {
                // Every seventh value missing, so the absent path is exercised.
                if (i + h) % 7 != 0 {
                    rec = rec.with_roi(horizon, ((i * 31 + h * 17) % 200) as f64 / 10.0 - 10.0);
                }
            }
            let pe = 10.0 + (i as f64 * 0.37).sin().abs() * 20.0;
            rec.with_pe(Some(pe), Some(9.0), Some(31.0))
                .with_breadth((i % 100) as f64)
        })
        .collect()
}

fn make_payload(n: usize) -> String {
    let rows: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"industry_name":"Industry {i}","preview_summary":"s","etf_roi":{{"1D":{a},"5D":null,"1M":{b}}},"pe_today":{pe},"pe_low_1y":9.0,"pe_high_1y":31.0,"market_breadth":55.0,"top_stocks":[]}}"#,
                a = i as f64 * 0.1,
                b = i as f64 * -0.2,
                pe = 10.0 + i as f64 * 0.05,
            )
        })
        .collect();
    format!(r#"{{"data":[{}]}}"#, rows.join(","))
}

// ── 1. Sort ──────────────────────────────────────────────────────────

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_records");
    for n in [20usize, 200, 2000] {
        let records = make_records(n);
        for key in [SortKey::Name, SortKey::Roi(RoiHorizon::OneMonth), SortKey::PeToday] {
            let config = SortConfig::new(key, SortDirection::Descending);
            group.bench_with_input(BenchmarkId::new(key.label(), n), &records, |b, recs| {
                b.iter(|| sort_records(black_box(recs), config))
            });
        }
    }
    group.finish();
}

// ── 2. Range ─────────────────────────────────────────────────────────

fn bench_range(c: &mut Criterion) {
    let records = make_records(200);
    c.bench_function("pe_range_200", |b| {
        b.iter(|| {
            black_box(&records)
                .iter()
                .filter(|r| pe_range(r).applicable())
                .count()
        })
    });
}

// ── 3. Decode ────────────────────────────────────────────────────────

fn bench_decode(c: &mut Criterion) {
    let payload = make_payload(150);
    c.bench_function("decode_industry_data_150", |b| {
        b.iter(|| {
            let resp: IndustryDataResponse = serde_json::from_str(black_box(&payload)).unwrap();
            resp.into_records().unwrap()
        })
    });
}

criterion_group!(benches, bench_sort, bench_range, bench_decode);
criterion_main!(benches);
