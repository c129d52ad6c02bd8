//! Pipeline orchestration.

use adfeed_core::{FeedRules, LinkTemplates, ProductRecord};
use adfeed_source::{AdsClient, RawAd};

use crate::attributes::{decode_attributes, AttributeSummary};
use crate::error::{AdError, PipelineError};
use crate::project::project_product;
use crate::rules::{evaluate, AdType};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "adfeed/0.1 (product-feed)";

/// Per-run counters. Reset every run; logged once at the end.
///
/// `auction` and `other` cover every ad that matched the subcategory
/// allow-list, whether or not it was projected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunDiagnostics {
    pub fetched: usize,
    pub malformed: usize,
    pub outside_subcategory: usize,
    pub auction: usize,
    pub other: usize,
    pub without_payment: usize,
    pub missing_identifier: usize,
    pub emitted: usize,
    /// Emitted records with an empty `image_link`.
    pub without_image: usize,
}

impl RunDiagnostics {
    fn record_ad_type(&mut self, ad_type: AdType) {
        match ad_type {
            AdType::Auction => self.auction += 1,
            AdType::Other => self.other += 1,
        }
    }
}

/// Product records in source order plus the run's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub products: Vec<ProductRecord>,
    pub diagnostics: RunDiagnostics,
}

/// Run the full pipeline once against `endpoint` with the default rules,
/// link templates, and HTTP settings.
///
/// # Errors
///
/// Returns [`PipelineError::SourceUnavailable`] if the client cannot be built
/// or the fetch fails. Per-ad failures never surface here.
pub async fn run(endpoint: &str, admin_secret: &str) -> Result<PipelineOutput, PipelineError> {
    let client = AdsClient::new(
        endpoint,
        admin_secret,
        DEFAULT_TIMEOUT_SECS,
        DEFAULT_USER_AGENT,
    )?;
    run_with_client(&client, &FeedRules::default(), &LinkTemplates::default()).await
}

/// Run the pipeline with a caller-configured client.
///
/// 1. Fetch ads updated in the last 24 hours (the only fatal step).
/// 2. Decode, filter, and project each ad in source order.
/// 3. Log the ad-type counters.
///
/// # Errors
///
/// Returns [`PipelineError::SourceUnavailable`] if the fetch fails.
pub async fn run_with_client(
    client: &AdsClient,
    rules: &FeedRules,
    links: &LinkTemplates,
) -> Result<PipelineOutput, PipelineError> {
    let ads = client.fetch_recent_ads().await?;
    Ok(process_ads(&ads, rules, links))
}

/// Decode, filter, and project a batch of fetched ads.
///
/// Pure and deterministic: the same input always yields the same output.
#[must_use]
pub fn process_ads(ads: &[RawAd], rules: &FeedRules, links: &LinkTemplates) -> PipelineOutput {
    let mut diagnostics = RunDiagnostics {
        fetched: ads.len(),
        ..RunDiagnostics::default()
    };
    let mut products = Vec::new();

    for ad in ads {
        match process_ad(ad, rules, links, &mut diagnostics) {
            Ok(Some(record)) => {
                if !record.has_image() {
                    diagnostics.without_image += 1;
                    tracing::debug!(ad_id = %ad.id, "emitting ad without an image");
                }
                products.push(record);
            }
            Ok(None) => {}
            Err(e @ AdError::MalformedAttributes { .. }) => {
                diagnostics.malformed += 1;
                tracing::warn!(
                    ad_id = %ad.id,
                    error = %e,
                    "skipping ad with malformed attributes"
                );
            }
            Err(AdError::MissingIdentifier { .. }) => {
                diagnostics.missing_identifier += 1;
                tracing::warn!(
                    ad_id = %ad.id,
                    "skipping ad due to missing code_number"
                );
            }
        }
    }

    diagnostics.emitted = products.len();

    tracing::info!(auction = diagnostics.auction, "ads with ad_type 'auction'");
    tracing::info!(other = diagnostics.other, "ads with other ad types");
    tracing::info!(
        fetched = diagnostics.fetched,
        malformed = diagnostics.malformed,
        outside_subcategory = diagnostics.outside_subcategory,
        without_payment = diagnostics.without_payment,
        missing_identifier = diagnostics.missing_identifier,
        emitted = diagnostics.emitted,
        without_image = diagnostics.without_image,
        "pipeline run complete"
    );

    PipelineOutput {
        products,
        diagnostics,
    }
}

/// Process one ad. `Ok(None)` means filtered out by the rules.
fn process_ad(
    ad: &RawAd,
    rules: &FeedRules,
    links: &LinkTemplates,
    diagnostics: &mut RunDiagnostics,
) -> Result<Option<ProductRecord>, AdError> {
    let steps =
        decode_attributes(&ad.attributes).map_err(|source| AdError::MalformedAttributes {
            ad_id: ad.id.clone(),
            source,
        })?;
    let summary = AttributeSummary::fold(&steps);
    let verdict = evaluate(&summary, rules);

    tracing::debug!(
        ad_id = %ad.id,
        steps = steps.len(),
        subcategory_match = verdict.subcategory_match,
        has_qualifying_payment = verdict.has_qualifying_payment,
        ad_type = %summary.ad_type,
        "evaluated ad"
    );

    if !verdict.is_counted() {
        diagnostics.outside_subcategory += 1;
        return Ok(None);
    }
    diagnostics.record_ad_type(verdict.ad_type);

    if !verdict.is_projected() {
        diagnostics.without_payment += 1;
        return Ok(None);
    }

    project_product(ad, &summary, links).map(Some)
}
