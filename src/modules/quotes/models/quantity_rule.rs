// Declarative quantity rules attached to catalog items,
// e.g. "1 waiter per 15 guests" or "2 bars for 50-100 guests".

use serde::{Deserialize, Serialize};

/// How many units of a catalog item a quote should carry for a guest count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum QuantityRule {
    /// One unit for every `divisor` guests, rounded up
    Ratio { divisor: u32 },
    /// Always `value` units regardless of guest count
    Fixed { value: u32 },
    /// `value` units when the guest count is within `min..=max`, otherwise none
    Range { min: u32, max: u32, value: u32 },
}

impl QuantityRule {
    /// Apply this rule to a guest count.
    ///
    /// A ratio divisor of 0 is treated as 1. A range yields 0 outside its
    /// bounds, meaning the item does not apply to the event.
    pub fn apply(&self, guest_count: u32) -> u32 {
        match *self {
            QuantityRule::Ratio { divisor } => guest_count.div_ceil(divisor.max(1)),
            QuantityRule::Fixed { value } => value,
            QuantityRule::Range { min, max, value } => {
                if (min..=max).contains(&guest_count) {
                    value
                } else {
                    0
                }
            }
        }
    }
}

/// Suggested quantity for an item with an optional rule.
///
/// Items without a rule are manual entries and default to a single unit.
pub fn derive_quantity(rule: Option<&QuantityRule>, guest_count: u32) -> u32 {
    rule.map_or(1, |rule| rule.apply(guest_count))
}
