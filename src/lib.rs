// sql-console library
//
// HTTP gateway over a single read-only SQLite database, plus the static
// browser console served from the same process.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
