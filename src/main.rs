#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use print_pricer::{config, core::report, errors::Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Load pricing configuration; a missing config.toml means defaults
    let app_config = if std::path::Path::new("config.toml").exists() {
        config::pricing::load_default_config()
            .inspect_err(|e| error!("Failed to load config.toml: {e}"))?
    } else {
        warn!("config.toml not found, using default pricing settings");
        config::pricing::Config::default()
    };
    info!(
        waste_policy = ?app_config.pricing.waste_policy,
        rounding = ?app_config.pricing.rounding_policy(),
        currency = %app_config.pricing.display_currency,
        "Pricing configuration loaded"
    );

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;
    info!("Database initialized successfully.");

    // 5. Report the catalog dashboard
    let display_currency = &app_config.pricing.display_currency;
    let summary = report::generate_dashboard_summary(&db, display_currency).await?;
    let symbol = config::currencies::get(display_currency).map_or("", |c| c.symbol);

    info!(
        products = summary.total_products,
        recent_this_week = summary.recent_count,
        "Catalog value {} | average margin {:.1}%",
        report::format_price(symbol, summary.total_value),
        summary.average_margin
    );

    for product in print_pricer::core::product::get_all_active_products(&db).await? {
        info!("{}", report::format_product_summary(&product, display_currency)?);
    }

    Ok(())
}
