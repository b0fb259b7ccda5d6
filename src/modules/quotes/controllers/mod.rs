mod quote_controller;

pub use quote_controller::{configure, suggest_quote, validate_quote};
