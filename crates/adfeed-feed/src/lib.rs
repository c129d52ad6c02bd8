//! Product feed document rendering and publishing.
//!
//! Turns projected [`adfeed_core::ProductRecord`]s into an RSS 2.0 document
//! carrying the Google Merchant `g:` namespace, and replaces the on-disk
//! artifact only when its content actually changed.

pub mod error;
pub mod render;
pub mod write;

pub use error::FeedError;
pub use render::{render_feed, FeedChannel, GOOGLE_MERCHANT_NAMESPACE};
pub use write::{write_feed_if_changed, FeedWriteOutcome};
