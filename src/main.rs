use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weldstore::api::{self, ApiClient};
use weldstore::config;
use weldstore::core::{format, pricing};
use weldstore::errors::Result;
use weldstore::store::cart::CartStore;
use weldstore::store::session::SessionStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Smoke-check the backend: fetch the catalog
    let client = ApiClient::from_config(&app_config);
    let products = api::products::fetch_all(&client)
        .await
        .inspect_err(|e| error!("Failed to fetch the product catalog: {e}"))?;
    info!("Catalog holds {} products.", products.len());

    // 5. Report local state
    let session = SessionStore::new(&app_config).load()?;
    if session.is_logged_in() {
        info!(user_id = ?session.user_id, "Session is logged in.");
    } else {
        info!("No active session.");
    }

    let cart_lines = CartStore::new(&app_config).load()?;
    info!(
        "Cart holds {} lines totalling {}.",
        cart_lines.len(),
        format::format_rupiah(pricing::cart_total(&cart_lines)),
    );

    Ok(())
}
