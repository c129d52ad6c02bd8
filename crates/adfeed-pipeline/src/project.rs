//! Projection from a raw ad plus its folded attributes to a [`ProductRecord`].

use adfeed_core::{LinkTemplates, ProductRecord, AVAILABILITY_IN_STOCK, PRICE_CURRENCY_SUFFIX};
use adfeed_source::RawAd;

use crate::attributes::AttributeSummary;
use crate::error::AdError;

const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Builds the feed record for a qualifying ad.
///
/// No validation beyond the identifier check: empty titles, non-numeric
/// prices, and missing brands pass through unchanged.
///
/// # Errors
///
/// Returns [`AdError::MissingIdentifier`] if the ad has an empty
/// `code_number`.
pub fn project_product(
    ad: &RawAd,
    summary: &AttributeSummary,
    links: &LinkTemplates,
) -> Result<ProductRecord, AdError> {
    if ad.code_number.is_empty() {
        return Err(AdError::MissingIdentifier {
            ad_id: ad.id.clone(),
        });
    }

    let image_link = if summary.image_src.is_empty() {
        String::new()
    } else {
        links.image_link(&ad.draft_id, &summary.image_src)
    };

    Ok(ProductRecord {
        id: ad.id.clone(),
        title: clean_title(&summary.search_text),
        description: clean_description(&ad.description),
        link: links.product_link(&ad.id),
        image_link,
        brand: summary.brand.clone(),
        price: format!("{}{PRICE_CURRENCY_SUFFIX}", summary.price),
        availability: AVAILABILITY_IN_STOCK.to_string(),
        code_number: ad.code_number.clone(),
    })
}

/// Strips every `&` from the title.
fn clean_title(search_text: &str) -> String {
    search_text.replace('&', "")
}

/// Removes U+200E LEFT-TO-RIGHT MARK, which the listing editor inserts
/// around mixed Arabic/Latin text.
fn clean_description(description: &str) -> String {
    description.replace(LEFT_TO_RIGHT_MARK, "")
}
