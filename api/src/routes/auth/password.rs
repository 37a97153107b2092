//! Password change, forgot and reset endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ChangePasswordRequest, ForgotPasswordRequest, ResetPasswordRequest};
use crate::dto::MessageResponse;
use crate::handlers::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for POST /auth/change-password
///
/// ## Errors
/// - 400 Bad Request: `old_password` does not match
/// - 401 Unauthorized: Missing or invalid bearer token
pub async fn change_password<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(auth.user_id(), &request.old_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password updated successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/forgot-password
///
/// ## Errors
/// - 404 Not Found: No account with that email
pub async fn forgot_password<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset email sent")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/reset-password
///
/// ## Errors
/// - 400 Bad Request: Token invalid, expired or not a reset token
/// - 404 Not Found: The account behind the token no longer exists
pub async fn reset_password<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(&request.token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
