//! Query gateway
//!
//! Owns the single SQLite handle and mediates every request against it:
//! catalog listing, schema introspection, sample rows, and ad-hoc SELECTs
//! that passed the validation gate.

pub mod engine;
pub mod gate;

pub use engine::{ColumnInfo, SqliteGateway};
pub use gate::validate_select;
