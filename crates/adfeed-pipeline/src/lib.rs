//! Attribute extraction and filtering pipeline.
//!
//! Turns raw ad rows from `adfeed-source` into feed-ready
//! [`adfeed_core::ProductRecord`]s:
//!
//! 1. [`attributes`] decodes each ad's attribute document into typed steps
//!    and folds duplicates.
//! 2. [`rules`] applies the subcategory and payment predicates.
//! 3. [`project`] builds the record for qualifying ads.
//! 4. [`pipeline`] drives the stages and keeps run diagnostics.

pub mod attributes;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod rules;

pub use error::{AdError, PipelineError};
pub use pipeline::{process_ads, run, run_with_client, PipelineOutput, RunDiagnostics};
pub use project::project_product;
