//! Catalog route handlers
//!
//! Catalog mutations carry no role check.

use actix_web::{web, HttpResponse};

use crate::dto::pizza::{
    CreatePizzaRequest, PizzaListQuery, PizzaResponse, PizzaSearchQuery, UpdatePizzaRequest,
};
use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;
use crate::state::AppState;

use pd_core::domain::entities::pizza::Pizza;
use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

fn pizza_list(pizzas: Vec<Pizza>) -> Vec<PizzaResponse> {
    pizzas.into_iter().map(PizzaResponse::from).collect()
}

/// Handler for GET /pizzas/?category=
pub async fn list_pizzas<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    query: web::Query<PizzaListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.pizza_service.list(query.category.as_deref()).await {
        Ok(pizzas) => HttpResponse::Ok().json(pizza_list(pizzas)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /pizzas/
///
/// ## Errors
/// - 409 Conflict: A product with this name exists
/// - 422 Unprocessable Entity: Blank name or negative price
pub async fn create_pizza<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<CreatePizzaRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.pizza_service.create(request.into_inner().into()).await {
        Ok(pizza) => HttpResponse::Ok().json(PizzaResponse::from(pizza)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /pizzas/search?query=
///
/// Case-insensitive substring match on the name.
pub async fn search_pizzas<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    query: web::Query<PizzaSearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.pizza_service.search(&query.query).await {
        Ok(pizzas) => HttpResponse::Ok().json(pizza_list(pizzas)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /pizzas/{id}
///
/// Partial update: only the fields present in the body change.
///
/// ## Errors
/// - 404 Not Found: No pizza with this id
pub async fn update_pizza<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    path: web::Path<i64>,
    request: web::Json<UpdatePizzaRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state
        .pizza_service
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(pizza) => HttpResponse::Ok().json(PizzaResponse::from(pizza)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /pizzas/{id}
///
/// ## Errors
/// - 404 Not Found: No pizza with this id
pub async fn delete_pizza<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.pizza_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Pizza deleted successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
