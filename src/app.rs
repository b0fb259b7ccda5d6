use std::sync::Arc;

use actix_web::web;

use crate::config::QuoteConfig;
use crate::middleware::{json_config, path_config};
use crate::modules;
use crate::modules::events::repositories::EventRepository;
use crate::modules::exports::services::{ExportService, PdfRenderer, TaskListExporter};
use crate::modules::quotes::services::QuoteCalculator;

/// Shared application state, cloned into every worker
#[derive(Clone)]
pub struct AppState {
    calculator: web::Data<QuoteCalculator>,
    pdf_renderer: web::Data<PdfRenderer>,
    export_service: web::Data<Arc<ExportService>>,
}

impl AppState {
    pub fn new(config: &QuoteConfig, event_repo: Arc<dyn EventRepository>) -> Self {
        let calculator = QuoteCalculator::new(config.currency);

        Self {
            calculator: web::Data::new(calculator),
            pdf_renderer: web::Data::new(PdfRenderer::new(calculator, config.company_name.clone())),
            export_service: web::Data::new(Arc::new(ExportService::new(
                event_repo,
                TaskListExporter::new(calculator),
            ))),
        }
    }

    /// Register state, extractor configuration and routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.calculator.clone())
            .app_data(self.pdf_renderer.clone())
            .app_data(self.export_service.clone())
            .app_data(json_config())
            .app_data(path_config())
            .configure(modules::configure);
    }
}
