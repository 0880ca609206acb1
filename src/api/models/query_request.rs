//! Query request model
//!
//! Payload for the `POST /api/query` endpoint.

use serde::{Deserialize, Serialize};

/// Request payload for ad-hoc query execution.
///
/// # Example
/// ```json
/// {
///   "query": "SELECT * FROM Incentive LIMIT 10"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The SQL text to execute. Must start with `select` (trimmed,
    /// case-insensitive) to pass the validation gate.
    pub query: String,
}
