//! Domain types: industry records, the data store, report documents.

pub mod dataset;
pub mod industry;
pub mod report;

pub use dataset::Dataset;
pub use industry::{IndustryRecord, RoiHorizon, TopStock};
pub use report::ReportDocument;
