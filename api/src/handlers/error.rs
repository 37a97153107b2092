//! Translation of domain errors into HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError, UrlencodedError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};

use pd_core::errors::{AuthError, DomainError, TokenError};
use pd_shared::errors::{error_codes, ErrorResponse};

/// Message returned for every bearer-token failure
pub const CREDENTIALS_MESSAGE: &str = "Could not validate credentials";

/// Status code and error code for a domain error
pub fn error_status(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Conflict { .. } => (StatusCode::CONFLICT, error_codes::CONFLICT),
        DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        DomainError::Forbidden { .. } => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        DomainError::ValidationErr(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::VALIDATION_ERROR,
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
        ),
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
            AuthError::IncorrectOldPassword | AuthError::InactiveUser => {
                (StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST)
            }
            AuthError::PasswordHashingFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::InvalidToken => (StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST),
            TokenError::TokenGenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        },
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures are logged with their detail and answered with a
/// generic message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = error_status(error);

    let message = if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
        "An internal error occurred".to_string()
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// The uniform response for a missing, malformed, expired or orphaned token
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
        .json(ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            CREDENTIALS_MESSAGE,
        ))
}

/// 422 response listing the failing fields of a request body
pub fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }

    HttpResponse::UnprocessableEntity().json(response)
}

fn validation_error(message: String) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        message.clone(),
    ));
    InternalError::from_response(message, response).into()
}

/// Malformed JSON bodies become 422 with the parser's message
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(format!("Invalid request body: {}", err))
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(format!("Invalid query string: {}", err))
}

pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(format!("Invalid form data: {}", err))
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(format!("Invalid path parameter: {}", err))
}
