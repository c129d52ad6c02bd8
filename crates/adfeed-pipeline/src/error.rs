use adfeed_source::SourceError;
use thiserror::Error;

/// Run-level failures. Only a failed fetch aborts a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Per-ad failures. Logged, counted, and skipped; never fatal.
#[derive(Debug, Error)]
pub enum AdError {
    #[error("malformed attributes for ad {ad_id}: {source}")]
    MalformedAttributes {
        ad_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("ad {ad_id} has no code_number")]
    MissingIdentifier { ad_id: String },
}
