use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Settings
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the bundled listings
    let catalog = match Catalog::sample() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "catalog failed to load");
            std::process::exit(1);
        }
    };
    tracing::info!(properties = catalog.properties().len(), "catalog loaded");

    // 3️⃣ Start the server
    tracing::info!(addr = %config.addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, every worker borrowing the same catalog
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
