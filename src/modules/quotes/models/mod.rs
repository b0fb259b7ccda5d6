mod line_item;
mod quantity_rule;
mod quote;

pub use line_item::{line_total, CatalogRef, LineItem, SubmittedLineItem};
pub use quantity_rule::{derive_quantity, QuantityRule};
pub use quote::{
    CatalogItem, QuoteTotals, SuggestQuoteRequest, SuggestedLineItem, SuggestedQuote,
    ValidateQuoteRequest, ValidatedQuote,
};
