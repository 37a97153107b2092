//! Shared application state

use std::sync::Arc;

use pd_core::repositories::{OrderRepository, PizzaRepository, UserRepository};
use pd_core::services::{AuthService, OrderService, PizzaService};
use pd_infra::database::DatabasePool;

/// Services handed to every request handler
pub struct AppState<U, P, O>
where
    U: UserRepository,
    P: PizzaRepository,
    O: OrderRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub pizza_service: Arc<PizzaService<P>>,
    pub order_service: Arc<OrderService<O, P>>,
    /// Pool probed by the health endpoint; absent when running over in-memory stores
    pub database: Option<DatabasePool>,
}

impl<U, P, O> AppState<U, P, O>
where
    U: UserRepository,
    P: PizzaRepository,
    O: OrderRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<U>>,
        pizza_service: Arc<PizzaService<P>>,
        order_service: Arc<OrderService<O, P>>,
    ) -> Self {
        Self {
            auth_service,
            pizza_service,
            order_service,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}
