use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest};

use crate::core::AppError;

/// Largest JSON body accepted by the quote endpoints
pub const JSON_LIMIT_BYTES: usize = 1024 * 1024;

/// Render JSON extractor failures in the application error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected JSON body");
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Malformed path parameters (e.g. a non-numeric event id) are 404s
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    AppError::not_found(format!("{} ({})", req.path(), err)).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
