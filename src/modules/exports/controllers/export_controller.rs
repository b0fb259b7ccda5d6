use std::sync::Arc;

use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::exports::services::{pdf_filename, ExportService, GeneratePdfRequest, PdfRenderer};

fn attachment(filename: String) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename)],
    }
}

/// Export an event's accepted quote as a CSV task list
/// GET /events/{event_id}/export/csv
pub async fn export_task_list_csv(
    service: web::Data<Arc<ExportService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let event_id = path.into_inner();
    let file = service.export_task_list(event_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((header::CONTENT_DISPOSITION, attachment(file.filename)))
        .body(file.content))
}

/// Render a quote as a PDF invoice
/// POST /quotes/generate-pdf
pub async fn generate_quote_pdf(
    renderer: web::Data<PdfRenderer>,
    request: web::Json<GeneratePdfRequest>,
) -> Result<HttpResponse, AppError> {
    let mut request = request.into_inner();
    let items = request
        .items
        .take()
        .ok_or_else(|| AppError::validation("Items array is required"))?;
    let filename = pdf_filename(&request.event_name);

    // printpdf is synchronous; keep it off the async workers
    let renderer = renderer.into_inner();
    let content = web::block(move || renderer.render(&request, &items))
        .await
        .map_err(|e| AppError::internal(format!("PDF rendering was cancelled: {}", e)))??;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((header::CONTENT_DISPOSITION, attachment(filename)))
        .body(content))
}

/// Configure event export routes
pub fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{event_id}/export/csv", web::get().to(export_task_list_csv));
}

/// Configure quote document routes
pub fn configure_quote_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-pdf", web::post().to(generate_quote_pdf));
}
