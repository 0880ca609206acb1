//! API routes configuration
//!
//! All endpoints live under the /api prefix:
//! - GET  /api/health                  - connection status, never fails
//! - POST /api/query                   - execute a SELECT statement
//! - GET  /api/tables                  - list catalog tables
//! - GET  /api/tables/{table}/schema   - column metadata
//! - GET  /api/tables/{table}/sample   - sample rows (limit, default 10)

use actix_web::web;

use crate::api::handlers;

/// Register the gateway's HTTP routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::health_check)
            .service(handlers::execute_query)
            .service(handlers::list_tables)
            .service(handlers::table_schema)
            .service(handlers::table_sample),
    );
}
