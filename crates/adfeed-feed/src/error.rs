use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to render feed document: {0}")]
    Render(#[from] std::io::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{context} ({path}): {source}")]
    Write {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
