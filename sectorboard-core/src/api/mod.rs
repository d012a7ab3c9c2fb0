//! Remote backend access: the [`IndustryApi`] trait, the HTTP client, and an
//! in-memory fixture.

pub mod fixture;
pub mod http;
pub mod provider;
pub mod wire;

pub use fixture::StaticApi;
pub use http::HttpApi;
pub use provider::{ApiError, IndustryApi};
