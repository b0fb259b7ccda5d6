// Test Data Factory
//
// Builds events, accepted-quote items and request payloads for tests.

use chrono::NaiveDate;
use quote_service::events::{Event, QuoteItem};
use rust_decimal::Decimal;
use serde_json::{json, Value};

pub struct TestDataFactory;

impl TestDataFactory {
    /// An event on 2026-11-14 with 120 guests, a venue and a client
    pub fn event(id: i64, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 11, 14).expect("valid date"),
            guest_count: 120,
            venue_name: Some("Hacienda Los Arcos".to_string()),
            client_name: Some("Ana Ruiz".to_string()),
        }
    }

    pub fn quote_item(name: &str, category: &str, quantity: i32, unit_price: Decimal) -> QuoteItem {
        QuoteItem {
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            quantity,
            unit: "pieza".to_string(),
            unit_price,
        }
    }

    /// Two items: 2 × 100 and 1 × 50 (subtotal 250, tax 40, total 290)
    pub fn validate_payload() -> Value {
        json!({
            "guestCount": 10,
            "items": [
                { "id": 1, "unitPrice": 100, "quantity": 2 },
                { "id": 2, "price": 50, "quantity": 1 }
            ]
        })
    }

    pub fn pdf_payload() -> Value {
        json!({
            "eventName": "Boda Ruiz",
            "guestCount": 120,
            "date": "2026-11-14",
            "items": [
                { "name": "Silla Tiffany", "quantity": 120, "price": 35, "unit": "pieza" },
                { "name": "Mesero", "quantity": 8, "price": 600, "unit": "persona" }
            ]
        })
    }
}
