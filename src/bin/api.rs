//! CRUD facade over the test-record store.
use actix_web::{web, App, HttpServer};
use leptos::logging::{error, log, warn};
use storefront::api;
use storefront::config::ApiConfig;
use storefront::db::{CloseOutcome, Database};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ApiConfig::load();

    // The store lives for the whole process and is handed to every worker
    let db = Database::new(&config.database_path).map_err(|e| {
        error!("[SERVER] Failed to open store at {}: {}", config.database_path, e);
        std::io::Error::other(e)
    })?;
    db.create_schema().await.map_err(std::io::Error::other)?;
    log!("[SERVER] Schema ready");

    let address = config.bind_address();
    log!("[SERVER] listening on http://{}", address);

    // Workers own their clones; they are gone once `run` resolves
    let data = web::Data::new(db.clone());
    HttpServer::new(move || App::new().app_data(data.clone()).configure(api::configure))
        .bind(&address)?
        .run()
        .await?;

    log!("[SERVER] Shutting down");
    match db.close().await {
        Ok(CloseOutcome::Closed) => log!("[SERVER] Store released"),
        Ok(CloseOutcome::StillShared) => warn!("[SERVER] Store still referenced at shutdown"),
        Err(e) => error!("[SERVER] Failed to close store: {}", e),
    }
    Ok(())
}
