//! Table browsing handlers: catalog listing, schema, sample rows.

use actix_web::{get, web, HttpResponse, Responder};
use log::warn;
use serde::Deserialize;
use std::sync::Arc;

use super::failure;
use crate::api::models::{SampleResponse, SchemaResponse, TablesResponse};
use crate::gateway::SqliteGateway;

/// Sample size when the caller sends no usable `limit`.
const DEFAULT_SAMPLE_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct SampleParams {
    /// Parsed leniently: absent, non-numeric, or non-positive values all
    /// fall back to the default instead of failing the request.
    limit: Option<String>,
}

impl SampleParams {
    fn effective_limit(&self) -> u32 {
        self.limit
            .as_deref()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_SAMPLE_LIMIT)
    }
}

/// GET /api/tables - list all table names from the catalog.
#[get("/tables")]
pub async fn list_tables(gateway: web::Data<Arc<SqliteGateway>>) -> impl Responder {
    match gateway.list_tables() {
        Ok(tables) => HttpResponse::Ok().json(TablesResponse::new(tables)),
        Err(e) => {
            warn!("Listing tables failed: {}", e);
            failure(&e)
        }
    }
}

/// GET /api/tables/{table}/schema - column metadata for one table.
///
/// An unknown table answers `success: true` with an empty schema, matching
/// the engine's own pass-through behavior for `PRAGMA table_info`.
#[get("/tables/{table}/schema")]
pub async fn table_schema(
    path: web::Path<String>,
    gateway: web::Data<Arc<SqliteGateway>>,
) -> impl Responder {
    let table = path.into_inner();
    match gateway.table_schema(&table) {
        Ok(schema) => HttpResponse::Ok().json(SchemaResponse::new(table, schema)),
        Err(e) => {
            warn!("Schema lookup for '{}' failed: {}", table, e);
            failure(&e)
        }
    }
}

/// GET /api/tables/{table}/sample?limit=N - up to N rows from one table,
/// default 10.
#[get("/tables/{table}/sample")]
pub async fn table_sample(
    path: web::Path<String>,
    params: web::Query<SampleParams>,
    gateway: web::Data<Arc<SqliteGateway>>,
) -> impl Responder {
    let table = path.into_inner();
    match gateway.sample_rows(&table, params.effective_limit()) {
        Ok(rows) => HttpResponse::Ok().json(SampleResponse::new(table, rows)),
        Err(e) => {
            warn!("Sampling '{}' failed: {}", table, e);
            failure(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit_defaults() {
        let absent = SampleParams { limit: None };
        assert_eq!(absent.effective_limit(), 10);

        let junk = SampleParams {
            limit: Some("abc".to_string()),
        };
        assert_eq!(junk.effective_limit(), 10);

        let zero = SampleParams {
            limit: Some("0".to_string()),
        };
        assert_eq!(zero.effective_limit(), 10);

        let negative = SampleParams {
            limit: Some("-3".to_string()),
        };
        assert_eq!(negative.effective_limit(), 10);
    }

    #[test]
    fn test_effective_limit_parses_positive() {
        let three = SampleParams {
            limit: Some("3".to_string()),
        };
        assert_eq!(three.effective_limit(), 3);
    }
}
