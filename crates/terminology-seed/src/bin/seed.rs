//! Seed script - loads the terminology crosswalk dataset
//!
//! Run with:
//! ```
//! cargo run -p terminology-seed --bin seed
//! ```

use sqlx::postgres::PgPoolOptions;
use terminology_seed::config::SeedConfig;
use terminology_seed::dataset;
use terminology_seed::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool);
    seeder.migrate().await?;

    let mappings = dataset::mappings();
    let seeded = seeder.seed_mappings(&mappings).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Mappings inserted: {}", seeded);
    tracing::info!("  Table total: {}", seeder.count_mappings().await?);

    Ok(())
}
