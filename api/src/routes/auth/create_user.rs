use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{CredentialsRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_failed};
use crate::middleware::auth::OptionalAuth;
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for POST /auth/create-user
///
/// Creates a verified account without the email round trip. The very first
/// account needs no caller and becomes admin; afterwards only an admin may
/// call this, and the new account is an employee.
///
/// ## Errors
/// - 403 Forbidden: Users exist and the caller is not an admin
/// - 409 Conflict: Email already registered
pub async fn create_user<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: OptionalAuth,
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
        .create_user(auth.user(), &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(&user)),
        Err(error) => handle_domain_error(&error),
    }
}
