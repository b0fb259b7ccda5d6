// A line item is one catalog item with a quantity and a unit price.
// Line items are built per request and never mutated; recomputing a quote
// produces new values with the authoritative unit price and total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};

/// Reference to a catalog item as sent by the client (numeric id or key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogRef {
    Id(i64),
    Key(String),
}

impl std::fmt::Display for CatalogRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRef::Id(id) => write!(f, "{}", id),
            CatalogRef::Key(key) => write!(f, "{}", key),
        }
    }
}

/// A priced line item with its computed total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CatalogRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Negative quantities are carried through, not rejected
    pub quantity: i64,

    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,

    /// quantity × unit_price, rounded to the currency scale
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
}

/// quantity × unit_price, rounded to the currency scale
///
/// # Errors
/// `Internal` when the product leaves the decimal range
pub fn line_total(quantity: i64, unit_price: Decimal, currency: Currency) -> Result<Decimal> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .map(|total| currency.round(total))
        .ok_or_else(|| {
            AppError::internal(format!(
                "Line total overflowed: {} x {}",
                quantity, unit_price
            ))
        })
}

/// A line item as asserted by the client when submitting a quote
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedLineItem {
    #[serde(default)]
    pub id: Option<CatalogRef>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub unit_price: Option<Decimal>,

    pub quantity: i64,
}

impl SubmittedLineItem {
    /// Unit price the client asserted: `unitPrice`, then `price`, then zero
    pub fn asserted_unit_price(&self) -> Decimal {
        self.unit_price.or(self.price).unwrap_or(Decimal::ZERO)
    }
}
