//! CORS middleware configuration for cross-origin requests.
//!
//! The browser frontend is served from a different origin than the API, so
//! every route is wrapped with the policy built here from [`CorsConfig`].

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pd_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// A `*` entry in the allowed origins switches to allow-any-origin, which
/// is what development uses. Credentials are only advertised for an
/// explicit origin list, since browsers reject them alongside a wildcard.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            tracing::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
