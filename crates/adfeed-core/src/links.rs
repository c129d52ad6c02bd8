//! URL templates for product pages and proxied images.

use quick_xml::escape::escape;

const DEFAULT_SITE_URL: &str = "https://ayshei.com";
const DEFAULT_DRAFT_STORAGE_URL: &str = "https://storage.ayshei.com/prod/public/drafts";
const IMAGE_WIDTH: u32 = 3840;
const IMAGE_QUALITY: u32 = 75;

/// Builds the `link` and `image_link` values of a product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    site_url: String,
    draft_storage_url: String,
}

impl LinkTemplates {
    #[must_use]
    pub fn new(site_url: &str, draft_storage_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_owned(),
            draft_storage_url: draft_storage_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// `https://ayshei.com/product/{ad_id}`
    #[must_use]
    pub fn product_link(&self, ad_id: &str) -> String {
        format!("{}/product/{ad_id}", self.site_url)
    }

    /// Image URL routed through the site's resizing proxy.
    ///
    /// The whole value is stored XML-escaped: query separators are emitted
    /// as `&amp;` and `draft_id` / `image_src` are escaped before insertion,
    /// so the feed writer can copy it verbatim.
    #[must_use]
    pub fn image_link(&self, draft_id: &str, image_src: &str) -> String {
        format!(
            "{}/_next/image?url={}/{}/web/{}&amp;w={IMAGE_WIDTH}&amp;q={IMAGE_QUALITY}",
            self.site_url,
            self.draft_storage_url,
            escape(draft_id),
            escape(image_src)
        )
    }
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL, DEFAULT_DRAFT_STORAGE_URL)
    }
}
