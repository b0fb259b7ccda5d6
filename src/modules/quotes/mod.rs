// Quotes module: pricing calculator and quote validation

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{LineItem, QuantityRule, QuoteTotals};
pub use services::QuoteCalculator;
