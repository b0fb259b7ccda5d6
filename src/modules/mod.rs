pub mod events;
pub mod exports;
pub mod health;
pub mod quotes;

use actix_web::web;

/// Register every route of the service
///
/// ```text
/// GET  /health
/// POST /api/quotes/validate
/// POST /api/quotes/suggest
/// POST /api/quotes/generate-pdf
/// GET  /api/events/{event_id}/export/csv
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::controllers::configure).service(
        web::scope("/api")
            .service(
                web::scope("/quotes")
                    .configure(quotes::controllers::configure)
                    .configure(exports::controllers::configure_quote_routes),
            )
            .service(
                web::scope("/events").configure(exports::controllers::configure_event_routes),
            ),
    );
}
