// Read-only access to events and their accepted quotes.
// Event CRUD is owned elsewhere; exports only read already-persisted rows.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::events::models::{Event, QuoteItem};

/// Status a quote carries once the client has accepted it
pub const ACCEPTED_QUOTE_STATUS: &str = "ACCEPTED";

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, event_id: i64) -> Result<Option<Event>>;

    /// Line items of the event's accepted quote, in insertion order.
    /// Empty when the event has no accepted quote.
    async fn find_accepted_quote_items(&self, event_id: i64) -> Result<Vec<QuoteItem>>;
}

/// MySQL-backed event repository
#[derive(Clone)]
pub struct MySqlEventRepository {
    pool: MySqlPool,
}

impl MySqlEventRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for MySqlEventRepository {
    async fn find_by_id(&self, event_id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.name, e.event_date, e.guest_count,
                   v.name AS venue_name, c.name AS client_name
            FROM events e
            LEFT JOIN venues v ON v.id = e.venue_id
            LEFT JOIN clients c ON c.id = e.client_id
            WHERE e.id = ?
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_accepted_quote_items(&self, event_id: i64) -> Result<Vec<QuoteItem>> {
        let items = sqlx::query_as::<_, QuoteItem>(
            r#"
            SELECT ci.name, ci.description, ci.category, qi.quantity,
                   ci.unit, qi.unit_price
            FROM quote_items qi
            INNER JOIN quotes q ON q.id = qi.quote_id
            INNER JOIN catalog_items ci ON ci.id = qi.catalog_item_id
            WHERE q.event_id = ? AND q.status = ?
            ORDER BY qi.id
            "#,
        )
        .bind(event_id)
        .bind(ACCEPTED_QUOTE_STATUS)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
