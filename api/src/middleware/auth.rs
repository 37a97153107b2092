//! Bearer-token authentication middleware.
//!
//! The middleware reads the `Authorization: Bearer <token>` header, resolves
//! the token to an active user and injects an [`AuthContext`] into the
//! request extensions.
//!
//! It runs in one of two modes:
//! 1. Required: any failure is answered with 401 before the handler runs
//! 2. Optional: a missing or invalid token leaves the request anonymous

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use pd_core::{
    domain::entities::user::{Role, User},
    errors::DomainResult,
    repositories::UserRepository,
    services::AuthService,
};

use crate::handlers::error::{unauthorized_response, CREDENTIALS_MESSAGE};

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

impl AuthContext {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Resolves a bearer token to the user it belongs to
///
/// Lets the middleware stay independent of the repository type parameters.
#[async_trait]
pub trait BearerResolver: Send + Sync {
    async fn resolve_bearer(&self, token: &str) -> DomainResult<User>;
}

#[async_trait]
impl<U> BearerResolver for AuthService<U>
where
    U: UserRepository + 'static,
{
    async fn resolve_bearer(&self, token: &str) -> DomainResult<User> {
        self.authenticate(token).await
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    resolver: Arc<dyn BearerResolver>,
    required: bool,
}

impl JwtAuth {
    /// Reject requests that do not carry a valid token
    pub fn required(resolver: Arc<dyn BearerResolver>) -> Self {
        Self {
            resolver,
            required: true,
        }
    }

    /// Attach the caller when a valid token is present, continue anonymously otherwise
    pub fn optional(resolver: Arc<dyn BearerResolver>) -> Self {
        Self {
            resolver,
            required: false,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            resolver: Arc::clone(&self.resolver),
            required: self.required,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    resolver: Arc<dyn BearerResolver>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = Arc::clone(&self.resolver);
        let required = self.required;

        Box::pin(async move {
            let user = match extract_bearer_token(&req) {
                Some(token) => match resolver.resolve_bearer(&token).await {
                    Ok(user) => Some(user),
                    Err(e) => {
                        tracing::debug!(error = %e, "Bearer token rejected");
                        None
                    }
                },
                None => None,
            };

            match user {
                Some(user) => {
                    req.extensions_mut().insert(AuthContext { user });
                }
                None if required => {
                    let (request, _) = req.into_parts();
                    let response = unauthorized_response().map_into_right_body();
                    return Ok(ServiceResponse::new(request, response));
                }
                None => {}
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized(CREDENTIALS_MESSAGE));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl OptionalAuth {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|ctx| &ctx.user)
    }
}

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
