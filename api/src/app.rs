//! Application factory
//!
//! Builds the Actix-web application: shared state, extractor error
//! handling and every route. Process-level middleware (CORS, request
//! tracing) is added by the caller.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};

use crate::handlers::error::{
    form_error_handler, json_error_handler, path_error_handler, query_error_handler,
};
use crate::middleware::auth::{BearerResolver, JwtAuth};
use crate::routes::{auth, health, orders, pizzas};
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};
use pd_shared::errors::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, O>(
    app_state: web::Data<AppState<U, P, O>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    let resolver: Arc<dyn BearerResolver> = app_state.auth_service.clone();
    let required = JwtAuth::required(resolver.clone());
    let optional = JwtAuth::optional(resolver);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Health check endpoint
        .route("/health", web::get().to(health::health_check::<U, P, O>))
        // Account routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register::<U, P, O>))
                .route("/verify-email", web::post().to(auth::verify_email::<U, P, O>))
                .route("/login", web::post().to(auth::login::<U, P, O>))
                .route("/token", web::post().to(auth::token::<U, P, O>))
                .route(
                    "/forgot-password",
                    web::post().to(auth::forgot_password::<U, P, O>),
                )
                .route(
                    "/reset-password",
                    web::post().to(auth::reset_password::<U, P, O>),
                )
                .service(
                    web::resource("/me")
                        .wrap(required.clone())
                        .route(web::get().to(auth::me)),
                )
                .service(
                    web::resource("/change-password")
                        .wrap(required.clone())
                        .route(web::post().to(auth::change_password::<U, P, O>)),
                )
                .service(
                    web::resource("/create-user")
                        .wrap(optional.clone())
                        .route(web::post().to(auth::create_user::<U, P, O>)),
                ),
        )
        // Catalog routes
        .service(
            web::scope("/pizzas")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(pizzas::list_pizzas::<U, P, O>))
                        .route(web::post().to(pizzas::create_pizza::<U, P, O>)),
                )
                .route("/search", web::get().to(pizzas::search_pizzas::<U, P, O>))
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(pizzas::update_pizza::<U, P, O>))
                        .route(web::delete().to(pizzas::delete_pizza::<U, P, O>)),
                ),
        )
        // Order routes
        .service(
            web::scope("/orders")
                .service(
                    web::resource("/create")
                        .wrap(optional)
                        .route(web::post().to(orders::create_order::<U, P, O>)),
                )
                .service(
                    web::resource(["", "/"])
                        .wrap(required.clone())
                        .route(web::get().to(orders::list_orders::<U, P, O>)),
                )
                .service(
                    web::resource("/{id}/status")
                        .wrap(required)
                        .route(web::patch().to(orders::update_order_status::<U, P, O>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
