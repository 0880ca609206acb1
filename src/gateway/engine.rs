//! SQLite gateway implementation
//!
//! The `SqliteGateway` opens the configured database file read-only, once,
//! at startup. If the file is missing or unreadable the gateway stays in a
//! degraded "not connected" state for the process lifetime; every data
//! operation then fails with a connection-unavailable error while the
//! health check keeps answering.
//!
//! All access is serialized through a `Mutex` because
//! `rusqlite::Connection` is not `Sync`.

use base64::Engine;
use log::{error, info};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, Params};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::path::{Path, PathBuf};

use crate::error::{GatewayError, Result};

/// A result row: column name to JSON value, in engine column order
/// (serde_json is built with `preserve_order`).
pub type Row = Map<String, JsonValue>;

/// One column of a table, as reported by `PRAGMA table_info`. The fields
/// pass through the engine's shape unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub notnull: i64,
    pub dflt_value: Option<String>,
    pub pk: i64,
}

/// The query gateway over a single read-only SQLite database.
pub struct SqliteGateway {
    /// `None` when the database file could not be opened at startup.
    conn: Option<Mutex<Connection>>,
    db_path: PathBuf,
}

impl SqliteGateway {
    /// Open the database file read-only. Attempted once; a failure leaves
    /// the gateway degraded rather than aborting the process.
    pub fn open(db_path: impl Into<PathBuf>) -> Self {
        let db_path = db_path.into();
        info!("Looking for database at: {}", db_path.display());

        let conn = if db_path.exists() {
            match Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY) {
                Ok(conn) => {
                    info!("Connected to SQLite database at: {}", db_path.display());
                    Some(Mutex::new(conn))
                }
                Err(e) => {
                    error!("Database connection failed: {}", e);
                    None
                }
            }
        } else {
            error!(
                "Database file not found at: {} — starting without a connection",
                db_path.display()
            );
            None
        };

        Self { conn, db_path }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .as_ref()
            .map(|m| m.lock())
            .ok_or(GatewayError::NotConnected)
    }

    /// List all table names from the catalog, in its natural order.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table'")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Column metadata for a table. An unknown table yields an empty list,
    /// mirroring the engine's own `PRAGMA table_info` behavior.
    pub fn table_schema(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let conn = self.conn()?;
        if !Self::table_in_catalog(&conn, table)? {
            return Ok(Vec::new());
        }
        let sql = format!("PRAGMA table_info({})", quote_ident(table));
        let mut stmt = conn.prepare(&sql)?;
        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    cid: row.get(0)?,
                    name: row.get(1)?,
                    column_type: row.get(2)?,
                    notnull: row.get(3)?,
                    dflt_value: row.get(4)?,
                    pk: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(columns)
    }

    /// Up to `limit` rows from a table, in the engine's default order.
    ///
    /// The table name arrives as an opaque path segment; it is checked
    /// against the live catalog (bound parameter, no interpolation) before
    /// any SQL is built from it, and quoted when it is.
    pub fn sample_rows(&self, table: &str, limit: u32) -> Result<Vec<Row>> {
        let conn = self.conn()?;
        if !Self::table_in_catalog(&conn, table)? {
            return Err(GatewayError::validation(format!(
                "Unknown table: {}",
                table
            )));
        }
        let sql = format!("SELECT * FROM {} LIMIT ?1", quote_ident(table));
        Self::fetch_all(&conn, &sql, params![limit])
    }

    /// Execute validated query text verbatim and materialize every row.
    pub fn execute_select(&self, query: &str) -> Result<Vec<Row>> {
        let conn = self.conn()?;
        Self::fetch_all(&conn, query, [])
    }

    // ── Private helpers ─────────────────────────────────────────────────

    fn table_in_catalog(conn: &Connection, table: &str) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn fetch_all(conn: &Connection, sql: &str, params: impl Params) -> Result<Vec<Row>> {
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let rows = stmt
            .query_map(params, |row| {
                let mut object = Map::with_capacity(columns.len());
                for (i, name) in columns.iter().enumerate() {
                    object.insert(name.clone(), value_ref_to_json(row.get_ref(i)?));
                }
                Ok(object)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

/// Convert one SQLite cell into JSON. BLOBs are base64-encoded; a REAL that
/// JSON cannot represent (NaN, infinity) becomes null.
fn value_ref_to_json(value: ValueRef<'_>) -> JsonValue {
    match value {
        ValueRef::Null => JsonValue::Null,
        ValueRef::Integer(n) => JsonValue::from(n),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        ValueRef::Text(s) => JsonValue::from(String::from_utf8_lossy(s).into_owned()),
        ValueRef::Blob(b) => {
            JsonValue::from(base64::engine::general_purpose::STANDARD.encode(b))
        }
    }
}

/// Double-quote an identifier for safe interpolation.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

// -- Unit tests --
