use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::events::repositories::EventRepository;

use super::task_list::TaskListExporter;

/// A rendered export ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Service for exporting accepted quotes
pub struct ExportService {
    event_repo: Arc<dyn EventRepository>,
    task_list: TaskListExporter,
}

impl ExportService {
    pub fn new(event_repo: Arc<dyn EventRepository>, task_list: TaskListExporter) -> Self {
        Self {
            event_repo,
            task_list,
        }
    }

    /// Task-list CSV for an event's accepted quote
    ///
    /// # Errors
    /// `NotFound` for an unknown event, `ExportTooLarge` past the row cap
    pub async fn export_task_list(&self, event_id: i64) -> Result<ExportFile> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {} not found", event_id)))?;

        let items = self.event_repo.find_accepted_quote_items(event_id).await?;
        if items.is_empty() {
            warn!(event_id, "Exporting event without accepted quote items");
        }

        let content = self.task_list.render(&event, &items)?;

        info!(
            event_id,
            items = items.len(),
            bytes = content.len(),
            "Task list exported"
        );

        Ok(ExportFile {
            filename: format!("event-{}-tasks.csv", event.id),
            content,
        })
    }
}
