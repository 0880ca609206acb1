// sql-console API layer
//
// HTTP handlers, routes, and request/response models for the query gateway.

pub mod handlers;
pub mod models;
pub mod routes;

use actix_web::{error::InternalError, web, HttpResponse};

use self::models::ErrorResponse;

/// JSON extractor configuration: a missing or wrong-typed request body
/// answers with the uniform `{success:false, error}` shape instead of
/// actix's default plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new("Query is required and must be a string");
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
