//! Fixed business rules for deciding which ads make it into the feed.

use std::collections::BTreeSet;

/// Category every fetched ad must belong to.
pub const TARGET_CATEGORY_ID: &str = "e87e7959-03ef-4bd1-930d-4a96c5743108";

/// Subcategories eligible for the feed.
pub const ALLOWED_SUBCATEGORY_IDS: [&str; 9] = [
    "212818c2-5ae3-4a95-88c9-370b3b906df0",
    "456ceaaa-de4d-449f-8621-3af7253fe452",
    "5feb2aa4-3361-401b-ab05-d0623bab291b",
    "7685d106-a4dd-48ed-876b-4dd8116f114c",
    "34991934-f9ef-457c-9824-c82dad366889",
    "1c4df47a-e94a-49b4-aeea-1d77dc4f5458",
    "e84fd5e8-c303-46db-b1c6-e493781aef40",
    "63d47c2b-a5eb-4439-b45d-ccbaa4ca671a",
    "73a17eb3-1686-40d6-bcce-edc5c69b5540",
];

pub const QUALIFYING_PAYMENT_METHOD: &str = "Online Payment";

pub const AUCTION_AD_TYPE: &str = "auction";

/// Immutable rule set handed to the filter for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRules {
    allowed_subcategories: BTreeSet<String>,
    qualifying_payment: String,
    auction_ad_type: String,
}

impl FeedRules {
    /// Builds a rule set from explicit values. Production code uses
    /// [`FeedRules::default`].
    #[must_use]
    pub fn new<I, S>(
        allowed_subcategories: I,
        qualifying_payment: &str,
        auction_ad_type: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_subcategories: allowed_subcategories
                .into_iter()
                .map(Into::into)
                .collect(),
            qualifying_payment: qualifying_payment.to_owned(),
            auction_ad_type: auction_ad_type.to_owned(),
        }
    }

    #[must_use]
    pub fn allows_subcategory(&self, subcategory_id: &str) -> bool {
        self.allowed_subcategories.contains(subcategory_id)
    }

    #[must_use]
    pub fn is_qualifying_payment(&self, payment_method: &str) -> bool {
        self.qualifying_payment == payment_method
    }

    #[must_use]
    pub fn is_auction(&self, ad_type: &str) -> bool {
        self.auction_ad_type == ad_type
    }
}

impl Default for FeedRules {
    fn default() -> Self {
        Self::new(
            ALLOWED_SUBCATEGORY_IDS,
            QUALIFYING_PAYMENT_METHOD,
            AUCTION_AD_TYPE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_allow_every_listed_subcategory() {
        let rules = FeedRules::default();
        for id in ALLOWED_SUBCATEGORY_IDS {
            assert!(rules.allows_subcategory(id), "{id} should be allowed");
        }
    }

    #[test]
    fn default_rules_match_known_subcategory() {
        let rules = FeedRules::default();
        assert!(rules.allows_subcategory("73a17eb3-1686-40d6-bcce-edc5c69b5540"));
        assert!(!rules.allows_subcategory(TARGET_CATEGORY_ID));
        assert!(!rules.allows_subcategory(""));
    }

    #[test]
    fn payment_match_is_exact() {
        let rules = FeedRules::default();
        assert!(rules.is_qualifying_payment("Online Payment"));
        assert!(!rules.is_qualifying_payment("online payment"));
        assert!(!rules.is_qualifying_payment("Cash on Delivery"));
    }

    #[test]
    fn auction_match_is_exact() {
        let rules = FeedRules::default();
        assert!(rules.is_auction("auction"));
        assert!(!rules.is_auction("Auction"));
        assert!(!rules.is_auction(""));
    }
}
