//! GraphQL client for the ads backend.
//!
//! Issues the single "recently updated published ads" query and returns the
//! rows untouched. Attribute decoding happens downstream in
//! `adfeed-pipeline`.

pub mod client;
pub mod error;
pub mod types;

pub use client::AdsClient;
pub use error::SourceError;
pub use types::RawAd;
