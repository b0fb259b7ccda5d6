pub mod quote_calculator;

pub use quote_calculator::{QuoteCalculator, TAX_RATE};
