//! Featured Item
//!
//! Picks the single "dish of the day" from an already aggregated menu.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::menu::models::MenuItem;

/// How the featured item is chosen among the discounted items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeaturedPolicy {
    /// The item with the greatest `old_price - price` wins. Equal discounts
    /// go to whichever item comes first in the list.
    #[default]
    LargestDiscount,

    /// The first discounted item in list order wins.
    FirstInOrder,
}

/// Unknown policy name.
#[derive(Debug, Error)]
#[error("unknown featured policy: {0}")]
pub struct UnknownPolicy(String);

impl FromStr for FeaturedPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "largest-discount" => Ok(Self::LargestDiscount),
            "first-in-order" => Ok(Self::FirstInOrder),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Selects the featured item using [`FeaturedPolicy::LargestDiscount`].
///
/// Returns `None` when no item is on promotion.
pub fn select_featured_item(items: &[MenuItem]) -> Option<&MenuItem> {
    select_featured_item_with(items, FeaturedPolicy::default())
}

/// Selects the featured item using the given policy.
///
/// Returns `None` when no item is on promotion.
pub fn select_featured_item_with(
    items: &[MenuItem],
    policy: FeaturedPolicy,
) -> Option<&MenuItem> {
    let mut discounted = items.iter().filter(|item| item.has_promotion());

    match policy {
        FeaturedPolicy::FirstInOrder => discounted.next(),
        // strictly greater, so earlier items win ties
        FeaturedPolicy::LargestDiscount => discounted.reduce(|best, item| {
            if item.discount() > best.discount() {
                item
            } else {
                best
            }
        }),
    }
}
