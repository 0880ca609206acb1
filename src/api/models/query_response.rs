//! Response models
//!
//! Every endpoint answers with one of these shapes. Successes carry
//! `success: true` plus their payload; every failure, regardless of
//! endpoint, serializes as `{success: false, error}`.

use serde::{Deserialize, Serialize};

use crate::gateway::engine::{ColumnInfo, Row};
use crate::gateway::SqliteGateway;

/// Successful result of `POST /api/query`.
///
/// # Example
/// ```json
/// {
///   "success": true,
///   "data": [{"id": 1, "region": "North"}],
///   "rowCount": 1,
///   "query": "SELECT * FROM Incentive LIMIT 1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub success: bool,
    pub data: Vec<Row>,
    pub row_count: usize,
    /// Echo of the executed query text.
    pub query: String,
}

impl QueryResponse {
    pub fn new(data: Vec<Row>, query: impl Into<String>) -> Self {
        let row_count = data.len();
        Self {
            success: true,
            data,
            row_count,
            query: query.into(),
        }
    }
}

/// Successful result of `GET /api/tables`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    pub success: bool,
    pub tables: Vec<String>,
}

impl TablesResponse {
    pub fn new(tables: Vec<String>) -> Self {
        Self {
            success: true,
            tables,
        }
    }
}

/// Successful result of `GET /api/tables/{table}/schema`. The `schema`
/// entries pass through the engine's column metadata unchanged; an unknown
/// table yields an empty list, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub success: bool,
    pub table: String,
    pub schema: Vec<ColumnInfo>,
}

impl SchemaResponse {
    pub fn new(table: impl Into<String>, schema: Vec<ColumnInfo>) -> Self {
        Self {
            success: true,
            table: table.into(),
            schema,
        }
    }
}

/// Successful result of `GET /api/tables/{table}/sample`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResponse {
    pub success: bool,
    pub table: String,
    pub data: Vec<Row>,
    pub row_count: usize,
}

impl SampleResponse {
    pub fn new(table: impl Into<String>, data: Vec<Row>) -> Self {
        let row_count = data.len();
        Self {
            success: true,
            table: table.into(),
            data,
            row_count,
        }
    }
}

/// Result of `GET /api/health`. This endpoint never fails; an absent
/// database connection is reported, not errored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub database: String,
    pub db_path: String,
}

impl HealthResponse {
    pub fn from_gateway(gateway: &SqliteGateway) -> Self {
        Self {
            status: "OK".to_string(),
            message: "API is running".to_string(),
            database: if gateway.is_connected() {
                "Connected".to_string()
            } else {
                "Not connected".to_string()
            },
            db_path: gateway.db_path().display().to_string(),
        }
    }
}

/// Uniform failure shape for every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
