use actix_web::{web, HttpResponse};
use tracing::info;

use crate::core::error::AppError;
use crate::modules::quotes::models::{SuggestQuoteRequest, ValidateQuoteRequest};
use crate::modules::quotes::services::QuoteCalculator;

/// Recompute a client-submitted quote
/// POST /quotes/validate
pub async fn validate_quote(
    calculator: web::Data<QuoteCalculator>,
    request: web::Json<ValidateQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let items = request
        .items
        .ok_or_else(|| AppError::validation("Items array is required"))?;

    let quote = calculator.validate_items(&items, request.guest_count)?;

    info!(
        items = quote.items.len(),
        guest_count = request.guest_count,
        total = %quote.totals.total,
        "Quote validated"
    );

    Ok(HttpResponse::Ok().json(quote))
}

/// Suggest quantities for catalog items from a guest count
/// POST /quotes/suggest
pub async fn suggest_quote(
    calculator: web::Data<QuoteCalculator>,
    request: web::Json<SuggestQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let catalog = request
        .items
        .ok_or_else(|| AppError::validation("Items array is required"))?;

    let quote = calculator.suggest(&catalog, request.guest_count)?;

    Ok(HttpResponse::Ok().json(quote))
}

/// Configure quote routes. PDF generation shares the scope and lives in the
/// exports module.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/validate", web::post().to(validate_quote))
        .route("/suggest", web::post().to(suggest_quote));
}
