//! Inclusion rules applied to a folded attribute summary.

use adfeed_core::FeedRules;

use crate::attributes::AttributeSummary;

/// Ad type bucket used for run diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdType {
    Auction,
    /// Any other declared type, including none.
    Other,
}

/// Outcome of evaluating one ad against [`FeedRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleVerdict {
    pub subcategory_match: bool,
    pub ad_type: AdType,
    pub has_qualifying_payment: bool,
}

impl RuleVerdict {
    /// Ads outside the allow-list are dropped before any counting.
    #[must_use]
    pub fn is_counted(&self) -> bool {
        self.subcategory_match
    }

    /// Ad type does not gate projection; only subcategory and payment do.
    #[must_use]
    pub fn is_projected(&self) -> bool {
        self.subcategory_match && self.has_qualifying_payment
    }
}

/// Evaluates the two inclusion predicates and classifies the ad type.
#[must_use]
pub fn evaluate(summary: &AttributeSummary, rules: &FeedRules) -> RuleVerdict {
    let subcategory_match = summary
        .subcategory_ids
        .iter()
        .any(|id| rules.allows_subcategory(id));

    let has_qualifying_payment = summary
        .payment_methods
        .iter()
        .any(|method| rules.is_qualifying_payment(method));

    let ad_type = if rules.is_auction(&summary.ad_type) {
        AdType::Auction
    } else {
        AdType::Other
    };

    RuleVerdict {
        subcategory_match,
        ad_type,
        has_qualifying_payment,
    }
}
