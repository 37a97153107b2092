use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, TokenForm};
use crate::handlers::{handle_domain_error, validation_failed};
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for POST /auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJhbGciOiJIUzI1NiJ9...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/token
///
/// Same as [`login`] but takes an OAuth2 password form
/// (`application/x-www-form-urlencoded`, `username` carries the email).
pub async fn token<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    form: web::Form<TokenForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state
        .auth_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(&error),
    }
}
