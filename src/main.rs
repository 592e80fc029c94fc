use crate::conf::{Settings, StoreBackend};
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use crate::store::{RecordStore, SqliteStore, SupabaseStore};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod conf;
mod db;
mod domain;
mod errors;
mod flash;
mod forms;
mod responses;
mod router;
mod spreadsheets;
mod store;
mod templates;


fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jobtrack=info")),
        )
        .init();
}

fn build_store(settings: &Settings) -> Result<Arc<dyn RecordStore>, errors::ServerError> {
    match settings.store {
        StoreBackend::Sqlite => {
            let db = Database::new(settings.database_path.clone());
            init_db(&db, &settings.schema_path)?;
            Ok(Arc::new(SqliteStore::new(db)))
        }
        StoreBackend::Supabase => {
            let url = settings.supabase_url.as_deref().unwrap_or_default();
            let key = settings.supabase_key.clone().unwrap_or_default();
            Ok(Arc::new(SupabaseStore::new(url, key)?))
        }
    }
}

fn main() {
    init_logging();

    // 1️⃣ Configuration from the environment
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ The record store every page talks to
    let store = match build_store(&settings) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "record store initialization failed");
            std::process::exit(1);
        }
    };
    let app = AppState::new(store);

    // 3️⃣ Start the server
    let addr: SocketAddr = match settings.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %settings.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, backend = ?settings.store, "starting JobTrack");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    // 4️⃣ Serve requests, passing the app state into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    match result {
        Ok(()) => tracing::info!("server shut down cleanly"),
        Err(e) => tracing::error!(error = %e, "server ended with error"),
    }
}
