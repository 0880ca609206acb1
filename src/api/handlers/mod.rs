//! HTTP request handlers
//!
//! One handler per gateway operation. Every gateway failure is translated
//! locally into the uniform `{success:false, error}` shape; nothing is
//! allowed to crash the request-handling process.

pub mod health;
pub mod query;
pub mod tables;

pub use health::health_check;
pub use query::execute_query;
pub use tables::{list_tables, table_sample, table_schema};

use actix_web::HttpResponse;

use super::models::ErrorResponse;
use crate::error::GatewayError;

/// Map a gateway error onto its HTTP response: validation failures are the
/// caller's fault (400), no-connection and engine errors are server-side
/// (500).
pub(crate) fn failure(err: &GatewayError) -> HttpResponse {
    let body = ErrorResponse::new(err.to_string());
    if err.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::InternalServerError().json(body)
    }
}
