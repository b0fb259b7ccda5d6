// Task-list CSV for an event's accepted quote.
//
// Layout: one synthetic row for the event itself, one row per quote item
// grouped by category, one synthetic post-event row.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::events::models::{Event, QuoteItem};
use crate::modules::quotes::services::QuoteCalculator;

/// Largest number of data rows (synthetic rows included) an export may hold
pub const MAX_EXPORT_ROWS: usize = 1000;

const DATE_FORMAT: &str = "%Y-%m-%d";
const PENDING: &str = "Pending";

/// One row of the task list; field names are the CSV headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    #[serde(rename = "Task Name")]
    pub task_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Quantity")]
    pub quantity: Option<i32>,
    #[serde(rename = "Unit")]
    pub unit: Option<String>,
    #[serde(rename = "Cost")]
    pub cost: Option<Decimal>,
}

/// Renders events and their accepted quotes as CSV task lists
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListExporter {
    calculator: QuoteCalculator,
}

impl TaskListExporter {
    pub fn new(calculator: QuoteCalculator) -> Self {
        Self { calculator }
    }

    /// Build the task rows for an event, failing when they exceed the cap
    pub fn rows(&self, event: &Event, items: &[QuoteItem]) -> Result<Vec<TaskRow>> {
        let row_count = items.len() + 2;
        if row_count > MAX_EXPORT_ROWS {
            return Err(AppError::ExportTooLarge {
                rows: row_count,
                limit: MAX_EXPORT_ROWS,
            });
        }

        let line_totals: Vec<Decimal> = items
            .iter()
            .map(|item| self.calculator.line_total(i64::from(item.quantity), item.unit_price))
            .collect::<Result<_>>()?;
        let totals = self.calculator.quote_totals(line_totals.iter())?;

        let mut rows = Vec::with_capacity(row_count);
        rows.push(event_row(event, totals.total));

        for (_, group) in group_by_category(items.iter().zip(line_totals.iter())) {
            for (item, total) in group {
                rows.push(item_row(event.event_date, item, *total));
            }
        }

        rows.push(post_event_row(event));
        Ok(rows)
    }

    /// Render the task list as CSV bytes, header included
    pub fn render(&self, event: &Event, items: &[QuoteItem]) -> Result<Vec<u8>> {
        let rows = self.rows(event, items)?;

        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(Vec::new());
        for row in &rows {
            writer.serialize(row)?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::internal(format!("Failed to flush CSV export: {}", e)))
    }
}

/// Group entries by category: categories in first-seen order, entries in
/// input order within each category
fn group_by_category<'a, T>(
    entries: impl Iterator<Item = (&'a QuoteItem, T)>,
) -> Vec<(&'a str, Vec<(&'a QuoteItem, T)>)> {
    let mut groups: Vec<(&str, Vec<(&QuoteItem, T)>)> = Vec::new();
    for (item, extra) in entries {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, group)) => group.push((item, extra)),
            None => groups.push((item.category.as_str(), vec![(item, extra)])),
        }
    }
    groups
}

fn event_row(event: &Event, quote_total: Decimal) -> TaskRow {
    let mut description = format!("{} guests", event.guests());
    if let Some(client) = &event.client_name {
        description = format!("{} for {}", description, client);
    }
    if let Some(venue) = &event.venue_name {
        description = format!("{} at {}", description, venue);
    }

    TaskRow {
        task_name: event.name.clone(),
        description,
        category: "Event".to_string(),
        due_date: event.event_date.format(DATE_FORMAT).to_string(),
        status: PENDING.to_string(),
        quantity: None,
        unit: None,
        cost: Some(quote_total),
    }
}

fn item_row(event_date: NaiveDate, item: &QuoteItem, total: Decimal) -> TaskRow {
    let description = item
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("{} {} of {}", item.quantity, item.unit, item.name));

    TaskRow {
        task_name: item.name.clone(),
        description,
        category: item.category.clone(),
        due_date: event_date.format(DATE_FORMAT).to_string(),
        status: PENDING.to_string(),
        quantity: Some(item.quantity),
        unit: Some(item.unit.clone()),
        cost: Some(total),
    }
}

fn post_event_row(event: &Event) -> TaskRow {
    let due = event
        .event_date
        .checked_add_days(Days::new(1))
        .unwrap_or(event.event_date);

    TaskRow {
        task_name: "Post-event follow-up".to_string(),
        description: format!(
            "Collect equipment, settle suppliers and request feedback for {}",
            event.name
        ),
        category: "Post-event".to_string(),
        due_date: due.format(DATE_FORMAT).to_string(),
        status: PENDING.to_string(),
        quantity: None,
        unit: None,
        cost: None,
    }
}
