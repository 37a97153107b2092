use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use pd_api::middleware::cors::create_cors;
use pd_api::telemetry::init_tracing;
use pd_api::{create_app, AppState};
use pd_core::services::{
    AuthService, AuthServiceConfig, OrderService, PizzaService, TokenService, TokenServiceConfig,
};
use pd_infra::database::{
    DatabasePool, MySqlOrderRepository, MySqlPizzaRepository, MySqlUserRepository,
};
use pd_infra::email::create_email_service;
use pd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting Pizza Delivery API server");

    let problems = config.validate();
    for problem in &problems {
        warn!("Configuration problem: {}", problem);
    }
    if config.environment.is_production() && !problems.is_empty() {
        anyhow::bail!("refusing to start with an unsafe production configuration");
    }

    // Database
    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    database
        .run_migrations()
        .await
        .context("failed to run database migrations")?;

    let pool = database.get_pool().clone();
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let pizza_repository = Arc::new(MySqlPizzaRepository::new(pool.clone()));
    let order_repository = Arc::new(MySqlOrderRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        &config.auth.jwt,
    ))?);
    let email_service = create_email_service(&config.email)?;
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        email_service,
        AuthServiceConfig::from(&config),
    ));
    let pizza_service = Arc::new(PizzaService::new(pizza_repository.clone()));
    let order_service = Arc::new(OrderService::new(order_repository, pizza_repository));

    let app_state = web::Data::new(
        AppState::new(auth_service, pizza_service, order_service).with_database(database.clone()),
    );

    let bind_address = config.server.bind_address();
    let cors_config = config.server.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), max_payload_size)
            .wrap(create_cors(&cors_config))
            .wrap(TracingLogger::default())
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
