pub mod event_repository;

pub use event_repository::{EventRepository, MySqlEventRepository, ACCEPTED_QUOTE_STATUS};
