use actix_web::HttpResponse;

use crate::dto::auth::UserResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /auth/me
///
/// Returns `{id, email, role}` of the caller. Requires a bearer token.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse::from(&auth.user))
}
