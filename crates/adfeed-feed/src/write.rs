//! Change-detecting, atomic replacement of the feed artifact.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::FeedError;

/// What [`write_feed_if_changed`] did with the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedWriteOutcome {
    /// The file was absent or differed and has been replaced.
    Written,
    /// The file already held the same document; nothing was touched.
    Unchanged,
}

/// Replace the file at `path` with `document` unless it already holds
/// identical content.
///
/// Content is compared by SHA-256. The new document is written to a temp
/// file in the same directory and renamed over the target, so readers never
/// observe a partially written feed.
///
/// # Errors
///
/// Returns [`FeedError::Write`] if the existing file cannot be read or the
/// new one cannot be written or renamed into place.
pub fn write_feed_if_changed(path: &Path, document: &[u8]) -> Result<FeedWriteOutcome, FeedError> {
    let new_digest = Sha256::digest(document);

    match std::fs::read(path) {
        Ok(existing) if Sha256::digest(&existing) == new_digest => {
            tracing::info!(path = %path.display(), "feed unchanged; skipping write");
            return Ok(FeedWriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(FeedError::Write {
                context: "failed to read existing feed",
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|source| FeedError::Write {
        context: "failed to create temp file",
        path: dir.to_path_buf(),
        source,
    })?;
    temp.write_all(document)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|source| FeedError::Write {
            context: "failed to write temp file",
            path: temp.path().to_path_buf(),
            source,
        })?;
    temp.persist(path).map_err(|e| FeedError::Write {
        context: "failed to move feed into place",
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!(
        path = %path.display(),
        bytes = document.len(),
        sha256 = %format!("{new_digest:x}"),
        "feed written"
    );
    Ok(FeedWriteOutcome::Written)
}
