// sql-console server entrypoint
//
// Loads configuration, opens the database read-only, and serves the query
// API plus the static console bundle from one process.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use sql_console::api;
use sql_console::api::routes;
use sql_console::config::ServerConfig;
use sql_console::gateway::SqliteGateway;
use sql_console::logging;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config = ServerConfig::load("config.toml")?;

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        config.logging.file_path.as_deref(),
        config.logging.log_to_console,
    )?;

    info!("Starting sql-console v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    // Open the database once; a failure leaves the gateway degraded rather
    // than aborting, so the health endpoint can report the state.
    let gateway = Arc::new(SqliteGateway::open(&config.database.path));
    if !gateway.is_connected() {
        warn!("Serving in degraded mode: every data endpoint will report the missing connection");
    }

    let bind_addr = config.bind_addr();
    let static_dir = config.server.static_dir.clone();
    info!("Starting HTTP server on {}", bind_addr);
    info!(
        "Endpoints: GET /api/health, POST /api/query, GET /api/tables, \
         GET /api/tables/{{table}}/schema, GET /api/tables/{{table}}/sample"
    );

    HttpServer::new(move || {
        // Permissive CORS so the console can also be served from elsewhere
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(gateway.clone()))
            .app_data(api::json_config())
            .configure(routes::configure_routes)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
