use serde::{Deserialize, Serialize};

/// Suffix appended to every projected price.
pub const PRICE_CURRENCY_SUFFIX: &str = " AED";

/// Availability value emitted for every feed item.
pub const AVAILABILITY_IN_STOCK: &str = "in stock";

/// A feed-ready product derived from one qualifying ad.
///
/// Built once per run by the projector and never mutated afterwards.
/// `code_number` is always non-empty: ads without one are dropped before a
/// record is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Source ad id, e.g. `"3f0c…"`.
    pub id: String,
    /// Search text with `&` stripped.
    pub title: String,
    /// Ad description with U+200E removed.
    pub description: String,
    /// Public product page URL.
    pub link: String,
    /// Resizing-proxy image URL, already XML-escaped (`&amp;`). Empty when
    /// the ad declares no image.
    pub image_link: String,
    pub brand: String,
    /// Price with currency suffix, e.g. `"100 AED"`.
    pub price: String,
    pub availability: String,
    /// GTIN as decimal text, exactly as the source returned it.
    pub code_number: String,
}

impl ProductRecord {
    /// Returns `true` when the record carries an image link.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_link.is_empty()
    }
}
