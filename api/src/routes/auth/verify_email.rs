use actix_web::{web, HttpResponse};

use crate::dto::auth::{UserResponse, VerifyEmailQuery, VerifyEmailResponse};
use crate::handlers::handle_domain_error;
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};
use pd_core::services::VerifyEmailOutcome;

/// Handler for POST /auth/verify-email?token=
///
/// Consumes a registration token and creates the account. Following the
/// same link twice is harmless: the second call reports that the user is
/// already registered.
///
/// ## Errors
/// - 400 Bad Request: Token invalid, expired or not a registration token
pub async fn verify_email<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    query: web::Query<VerifyEmailQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.auth_service.verify_email(&query.token).await {
        Ok(VerifyEmailOutcome::Registered(user)) => HttpResponse::Ok().json(VerifyEmailResponse {
            message: "Email verified successfully".to_string(),
            user: Some(UserResponse::from(&user)),
        }),
        Ok(VerifyEmailOutcome::AlreadyRegistered) => {
            HttpResponse::Ok().json(VerifyEmailResponse {
                message: "User already registered".to_string(),
                user: None,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
