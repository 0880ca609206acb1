//! SELECT-only validation gate for ad-hoc query text.

use crate::error::{GatewayError, Result};

/// Accept only query text that, after trimming and case-folding, starts
/// with `select`.
///
/// This is a prefix check, not a parser: it will not catch a `select`
/// hidden behind a leading comment or a compound statement. It is an
/// advisory guard against accidental writes; the real write barrier is the
/// connection itself, which is opened read-only.
pub fn validate_select(query: &str) -> Result<()> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::validation(
            "Query is required and must be a non-empty string",
        ));
    }
    if !trimmed.to_lowercase().starts_with("select") {
        return Err(GatewayError::validation("Only SELECT queries are allowed"));
    }
    Ok(())
}
