//! API data models
//!
//! Request and response structures for the query gateway endpoints. Wire
//! field names are camelCase to match the console client.

pub mod query_request;
pub mod query_response;

pub use query_request::QueryRequest;
pub use query_response::{
    ErrorResponse, HealthResponse, QueryResponse, SampleResponse, SchemaResponse, TablesResponse,
};
