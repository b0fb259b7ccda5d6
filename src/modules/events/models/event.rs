use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event as stored by the back office, with its venue and client names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    pub guest_count: i32,
    pub venue_name: Option<String>,
    pub client_name: Option<String>,
}

impl Event {
    /// Guest count clamped to zero for rows with a negative count
    pub fn guests(&self) -> u32 {
        u32::try_from(self.guest_count).unwrap_or(0)
    }
}

/// One line of an event's accepted quote, joined with its catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuoteItem {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub unit_price: Decimal,
}
