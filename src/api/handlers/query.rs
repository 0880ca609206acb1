//! Ad-hoc query handler for the `POST /api/query` endpoint.

use actix_web::{post, web, HttpResponse, Responder};
use log::{debug, warn};
use std::sync::Arc;

use super::failure;
use crate::api::models::{QueryRequest, QueryResponse};
use crate::gateway::{gate, SqliteGateway};

/// POST /api/query - execute arbitrary query text.
///
/// The text must pass the SELECT-prefix gate; rejected text never reaches
/// the engine. Accepted text is handed verbatim to SQLite and every
/// returned row is materialized into the response.
///
/// # Example Request
/// ```json
/// { "query": "SELECT * FROM Incentive LIMIT 10" }
/// ```
///
/// # Example Response
/// ```json
/// {
///   "success": true,
///   "data": [{"id": 1, "region": "North"}],
///   "rowCount": 1,
///   "query": "SELECT * FROM Incentive LIMIT 10"
/// }
/// ```
#[post("/query")]
pub async fn execute_query(
    req: web::Json<QueryRequest>,
    gateway: web::Data<Arc<SqliteGateway>>,
) -> impl Responder {
    if let Err(e) = gate::validate_select(&req.query) {
        warn!("Rejected query: {}", e);
        return failure(&e);
    }

    debug!("Executing query: {}", req.query);
    match gateway.execute_select(&req.query) {
        Ok(rows) => HttpResponse::Ok().json(QueryResponse::new(rows, req.query.clone())),
        Err(e) => {
            warn!("Query failed: {}", e);
            failure(&e)
        }
    }
}
