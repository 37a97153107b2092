use actix_web::{web, HttpResponse};

use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for GET /health
///
/// Reports 503 when the database does not answer.
pub async fn health_check<U, P, O>(state: web::Data<AppState<U, P, O>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    let database = match &state.database {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            _ => "down",
        },
        None => "not_configured",
    };

    let body = serde_json::json!({
        "status": if database == "down" { "unhealthy" } else { "healthy" },
        "service": "pizza-delivery-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database == "down" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
