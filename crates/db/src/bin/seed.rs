//! Seed a local database with development data.
//!
//! Requires `DATABASE_URL`. Applies pending migrations first.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uninbox_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = uninbox_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    uninbox_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = uninbox_db::seed::seed_dev_data(&pool)
        .await
        .context("Seeding failed")?;

    println!(
        "user {} (id {}) is admin of org {} (id {})",
        summary.user_public_id, summary.user_id, summary.org_public_id, summary.org_id
    );
    Ok(())
}
