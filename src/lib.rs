//! Event Quote Service Library
//!
//! Pricing, validation and export of event quotes for the events back office.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::events;
pub use modules::exports;
pub use modules::quotes;
