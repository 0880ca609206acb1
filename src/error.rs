use thiserror::Error;

/// Errors surfaced by the query gateway.
///
/// Three conditions exist: the database handle was never opened, the caller
/// sent something the gateway refuses to forward, or SQLite itself rejected
/// the statement at prepare or execution time.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Database not connected. Check the configured database path and restart the server")]
    NotConnected,

    #[error("{0}")]
    Validation(String),

    #[error("SQLite error: {0}")]
    Engine(String),
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        GatewayError::Validation(message.into())
    }

    /// Whether the caller is at fault (maps to a 4xx response).
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(err: rusqlite::Error) -> Self {
        GatewayError::Engine(err.to_string())
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
