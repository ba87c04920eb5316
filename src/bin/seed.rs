//! Bootstraps the test-record store with a few rows.
//!
//! ```sh
//! STOREFRONT_DB=storefront.db cargo run --bin storefront-seed
//! ```
use leptos::logging::{error, log};
use storefront::config::ApiConfig;
use storefront::db;

#[actix_web::main]
async fn main() {
    let config = ApiConfig::load();

    match db::seed(&config.database_path).await {
        Ok(records) => log!("[SEED] Seeded {} records into {}", records.len(), config.database_path),
        Err(e) => {
            error!("[SEED] Seeding {} failed: {}", config.database_path, e);
            std::process::exit(1);
        }
    }
}
