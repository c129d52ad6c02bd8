//! One end-to-end feed run: fetch, filter, render, publish.

use std::path::PathBuf;

use adfeed_core::{AppConfig, FeedRules, LinkTemplates};
use adfeed_feed::{render_feed, write_feed_if_changed, FeedChannel, FeedWriteOutcome};
use adfeed_pipeline::{run_with_client, RunDiagnostics};
use adfeed_source::AdsClient;
use anyhow::Context;

const FEED_DESCRIPTION: &str = "Products listed on Ayshei";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunOptions {
    pub(crate) output: PathBuf,
    pub(crate) dry_run: bool,
}

/// Outcome of a completed run. `written` is `None` for dry runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) diagnostics: RunDiagnostics,
    pub(crate) written: Option<FeedWriteOutcome>,
}

/// Runs the pipeline once and publishes the result.
///
/// A failed fetch returns before anything is rendered, so the previously
/// published feed stays in place.
pub(crate) async fn run_once(config: &AppConfig, options: &RunOptions) -> anyhow::Result<RunSummary> {
    let client = AdsClient::new(
        &config.graphql_endpoint,
        &config.admin_secret,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build ads client")?;
    let links = LinkTemplates::default();

    let output = run_with_client(&client, &FeedRules::default(), &links)
        .await
        .context("feed run failed")?;

    let channel = FeedChannel::new(&config.feed_title, links.site_url(), FEED_DESCRIPTION);
    let document = render_feed(&channel, &output.products).context("failed to render feed")?;

    if options.dry_run {
        tracing::info!(
            products = output.products.len(),
            bytes = document.len(),
            path = %options.output.display(),
            "dry run; feed not written"
        );
        return Ok(RunSummary {
            diagnostics: output.diagnostics,
            written: None,
        });
    }

    let outcome = write_feed_if_changed(&options.output, &document)
        .with_context(|| format!("failed to publish feed to {}", options.output.display()))?;

    Ok(RunSummary {
        diagnostics: output.diagnostics,
        written: Some(outcome),
    })
}
