//! Order route handlers

use actix_web::{web, HttpResponse};

use crate::dto::order::{
    CreateOrderRequest, CreateOrderResponse, OrderResponse, UpdateOrderStatusRequest,
};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::{AuthContext, OptionalAuth};
use crate::state::AppState;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};

/// Handler for POST /orders/create
///
/// Authentication is optional; without a valid token the order is a guest
/// order with no owner. Prices are taken from the catalog at this moment.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "order_id": 42
/// }
/// ```
///
/// ## Errors
/// - 404 Not Found: A product id does not exist
/// - 422 Unprocessable Entity: No items, or a quantity ≤ 0
pub async fn create_order<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: OptionalAuth,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    let user_id = auth.user().map(|user| user.id);
    let request = request.into_inner();

    match state
        .order_service
        .create_order(user_id, &request.lines(), request.delivery_address)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(CreateOrderResponse { order_id: order.id }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /orders/
///
/// Admins and employees see every order, customers only their own.
/// Newest orders come first.
pub async fn list_orders<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state.order_service.list_orders(&auth.user).await {
        Ok(orders) => HttpResponse::Ok().json(
            orders
                .iter()
                .map(OrderResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PATCH /orders/{id}/status
///
/// ## Errors
/// - 403 Forbidden: Caller is not an admin
/// - 404 Not Found: No order with this id
pub async fn update_order_status<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<UpdateOrderStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PizzaRepository + 'static,
    O: OrderRepository + 'static,
{
    match state
        .order_service
        .update_status(&auth.user, path.into_inner(), &request.status)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(OrderResponse::from(&order)),
        Err(error) => handle_domain_error(&error),
    }
}
