use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{CatalogRef, LineItem, SubmittedLineItem};
use super::quantity_rule::QuantityRule;

/// Subtotal, tax and total of a quote.
///
/// Amounts go out as JSON numbers and are read from numbers or strings.
/// Always derived from line items by `QuoteCalculator::quote_totals`; never
/// persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub subtotal: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub tax: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
}

/// Body of POST /quotes/validate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateQuoteRequest {
    /// Required; kept optional so a missing array gets a descriptive 400
    #[serde(default)]
    pub items: Option<Vec<SubmittedLineItem>>,

    #[serde(default)]
    pub guest_count: u32,
}

/// Response of POST /quotes/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedQuote {
    pub valid: bool,
    pub items: Vec<LineItem>,
    pub totals: QuoteTotals,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub per_person_cost: Option<Decimal>,
}

/// A catalog item offered for quantity suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: CatalogRef,
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rule: Option<QuantityRule>,
}

/// Body of POST /quotes/suggest
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestQuoteRequest {
    pub guest_count: u32,
    #[serde(default)]
    pub items: Option<Vec<CatalogItem>>,
}

/// A catalog item with the quantity its rule suggests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedLineItem {
    pub id: CatalogRef,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
}

/// Response of POST /quotes/suggest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedQuote {
    pub guest_count: u32,
    pub items: Vec<SuggestedLineItem>,
    pub totals: QuoteTotals,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub per_person_cost: Option<Decimal>,
}
