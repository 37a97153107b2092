//! Reset the database to the starter catalog and admin account
//!
//! ```text
//! SEED_ADMIN_PASSWORD=... cargo run -p pd_api --bin pd_seed
//! ```

use anyhow::Context;
use tracing::{info, warn};

use pd_api::telemetry::init_tracing;
use pd_core::services::PasswordHasher;
use pd_infra::database::{seed_database, DatabasePool};
use pd_shared::config::AppConfig;

const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    let admin_email =
        std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let admin_password = match std::env::var("SEED_ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            if config.environment.is_production() {
                anyhow::bail!("SEED_ADMIN_PASSWORD must be set in production");
            }
            warn!("SEED_ADMIN_PASSWORD not set, using the default admin password");
            DEFAULT_ADMIN_PASSWORD.to_string()
        }
    };

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    database
        .run_migrations()
        .await
        .context("failed to run database migrations")?;

    let password_hash = PasswordHasher::new(config.auth.bcrypt_cost)
        .hash(&admin_password)
        .context("failed to hash the admin password")?;

    let summary = seed_database(database.get_pool(), &admin_email, &password_hash)
        .await
        .context("failed to seed the database")?;

    info!("Seeded {}", summary);
    database.close().await;
    Ok(())
}
