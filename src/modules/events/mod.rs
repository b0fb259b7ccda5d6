// Events module: read access to events and accepted quotes

pub mod models;
pub mod repositories;

pub use models::{Event, QuoteItem};
pub use repositories::{EventRepository, MySqlEventRepository};
