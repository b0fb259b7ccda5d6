// In-memory EventRepository
//
// Holds events and accepted-quote items in maps; populated once by the test
// before the app starts, read-only afterwards.

use std::collections::HashMap;

use async_trait::async_trait;
use quote_service::core::{AppError, Result};
use quote_service::events::{Event, EventRepository, QuoteItem};

#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: HashMap<i64, Event>,
    accepted_items: HashMap<i64, Vec<QuoteItem>>,
    failing: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event together with its accepted quote items
    pub fn with_event(mut self, event: Event, items: Vec<QuoteItem>) -> Self {
        self.accepted_items.insert(event.id, items);
        self.events.insert(event.id, event);
        self
    }

    /// Make every query fail as if the database were unreachable
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(AppError::internal("database unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, event_id: i64) -> Result<Option<Event>> {
        self.check()?;
        Ok(self.events.get(&event_id).cloned())
    }

    async fn find_accepted_quote_items(&self, event_id: i64) -> Result<Vec<QuoteItem>> {
        self.check()?;
        Ok(self
            .accepted_items
            .get(&event_id)
            .cloned()
            .unwrap_or_default())
    }
}
