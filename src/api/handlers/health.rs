//! Health check handler

use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::api::models::HealthResponse;
use crate::gateway::SqliteGateway;

/// GET /api/health - report whether the database connection is established
/// and which file it resolves to. Never fails; a missing connection is a
/// reported state, not an error.
#[get("/health")]
pub async fn health_check(gateway: web::Data<Arc<SqliteGateway>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::from_gateway(&gateway))
}
