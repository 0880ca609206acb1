//! Shared fixtures for the integration tests: temporary SQLite databases
//! and gateways opened on them.

#![allow(dead_code)]

use rusqlite::Connection;
use sql_console::gateway::SqliteGateway;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Create an `Incentive` table with `rows` sequential rows at `path`.
pub fn seed_incentive(path: &Path, rows: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Incentive (
             id INTEGER PRIMARY KEY,
             region TEXT NOT NULL,
             amount REAL
         );",
    )
    .unwrap();
    for i in 1..=rows {
        conn.execute(
            "INSERT INTO Incentive (id, region, amount) VALUES (?1, ?2, ?3)",
            rusqlite::params![i as i64, format!("region-{}", i), (i * 100) as f64],
        )
        .unwrap();
    }
}

/// A gateway over a database holding an `Incentive` table with `rows` rows.
pub fn incentive_fixture(rows: usize) -> (TempDir, Arc<SqliteGateway>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("incentives.db");
    seed_incentive(&path, rows);
    let gateway = Arc::new(SqliteGateway::open(&path));
    assert!(gateway.is_connected());
    (dir, gateway)
}

/// A gateway over a valid database file containing zero tables.
pub fn empty_fixture() -> (TempDir, Arc<SqliteGateway>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.db");
    // Opening and closing a connection materializes an empty database file.
    Connection::open(&path).unwrap();
    let gateway = Arc::new(SqliteGateway::open(&path));
    assert!(gateway.is_connected());
    (dir, gateway)
}

/// A gateway opened on a path where no database file exists.
pub fn degraded_fixture() -> (TempDir, Arc<SqliteGateway>) {
    let dir = TempDir::new().unwrap();
    let gateway = Arc::new(SqliteGateway::open(dir.path().join("missing.db")));
    assert!(!gateway.is_connected());
    (dir, gateway)
}

/// Build the app the way `main` does, minus CORS and static files.
#[macro_export]
macro_rules! test_app {
    ($gateway:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($gateway.clone()))
                .app_data(sql_console::api::json_config())
                .configure(sql_console::api::routes::configure_routes),
        )
        .await
    };
}
