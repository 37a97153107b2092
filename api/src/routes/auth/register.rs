use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::CredentialsRequest;
use crate::dto::MessageResponse;
use crate::handlers::{handle_domain_error, validation_failed};
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for POST /auth/register
///
/// Starts a registration. Nothing is stored yet; a verification link is
/// emailed and the account is created when that link is followed.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "customer@example.com",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Verification email sent"
/// }
/// ```
///
/// ## Errors
/// - 409 Conflict: Email already registered
/// - 422 Unprocessable Entity: Invalid email or empty password
pub async fn register<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Verification email sent")),
        Err(error) => handle_domain_error(&error),
    }
}
