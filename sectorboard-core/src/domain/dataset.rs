//! The data store: the last fetched collection plus the benchmark row.

use serde::{Deserialize, Serialize};

use super::IndustryRecord;

/// Most recently fetched industry data.
///
/// The benchmark (broad-market index) is held apart from the rankable set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub benchmark: Option<IndustryRecord>,
    pub industries: Vec<IndustryRecord>,
}

impl Dataset {
    /// Split a fetched collection into benchmark + industries.
    ///
    /// The first record whose name equals `benchmark_name` becomes the
    /// benchmark; any later duplicate stays in the rankable set.
    pub fn from_records(records: Vec<IndustryRecord>, benchmark_name: &str) -> Self {
        let mut benchmark = None;
        let mut industries = Vec::with_capacity(records.len());
        for record in records {
            if benchmark.is_none() && record.name == benchmark_name {
                benchmark = Some(record);
            } else {
                industries.push(record);
            }
        }
        Self {
            benchmark,
            industries,
        }
    }

    /// Look a record up by identity, benchmark included.
    pub fn find(&self, name: &str) -> Option<&IndustryRecord> {
        self.benchmark
            .iter()
            .chain(self.industries.iter())
            .find(|r| r.name == name)
    }

    /// Names of the rankable industries in fetch order.
    pub fn industry_names(&self) -> Vec<&str> {
        self.industries.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmark.is_none() && self.industries.is_empty()
    }
}
