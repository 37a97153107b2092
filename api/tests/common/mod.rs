//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use rust_decimal::Decimal;

use pd_api::AppState;
use pd_core::domain::entities::pizza::{NewPizza, Pizza};
use pd_core::domain::entities::user::{Role, User};
use pd_core::repositories::{
    MockOrderRepository, MockPizzaRepository, MockUserRepository, PizzaRepository,
    UserRepository,
};
use pd_core::services::{
    AuthService, AuthServiceConfig, OrderService, PasswordHasher, PizzaService, TokenService,
    TokenServiceConfig,
};
use pd_infra::email::MockEmailService;

pub const MAX_PAYLOAD: usize = 1024 * 1024;
pub const PASSWORD: &str = "correct horse";

pub type TestState = AppState<MockUserRepository, MockPizzaRepository, MockOrderRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub pizzas: Arc<MockPizzaRepository>,
    pub orders: Arc<MockOrderRepository>,
    pub tokens: Arc<TokenService>,
    pub email: Arc<MockEmailService>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let pizzas = Arc::new(MockPizzaRepository::new());
        let orders = Arc::new(MockOrderRepository::new());
        let tokens = Arc::new(
            TokenService::new(TokenServiceConfig::new("api-test-secret")).unwrap(),
        );
        let email = Arc::new(MockEmailService::new());

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            tokens.clone(),
            email.clone(),
            AuthServiceConfig {
                frontend_url: "http://front.test".to_string(),
                bcrypt_cost: 4,
                ..AuthServiceConfig::default()
            },
        ));
        let pizza_service = Arc::new(PizzaService::new(pizzas.clone()));
        let order_service = Arc::new(OrderService::new(orders.clone(), pizzas.clone()));

        Self {
            state: web::Data::new(AppState::new(auth_service, pizza_service, order_service)),
            users,
            pizzas,
            orders,
            tokens,
            email,
        }
    }

    /// Store a verified user whose password is [`PASSWORD`]
    pub async fn seed_user(&self, email: &str, role: Role) -> User {
        let hash = PasswordHasher::new(4).hash(PASSWORD).unwrap();
        self.users
            .create(User::new(email, hash, role).verified())
            .await
            .unwrap()
    }

    pub async fn seed_pizza(&self, name: &str, price: Decimal) -> Pizza {
        self.pizzas.create(NewPizza::new(name, price)).await.unwrap()
    }

    /// `Authorization` header value for `user`
    pub fn bearer(&self, user: &User) -> String {
        self.bearer_for_id(user.id)
    }

    pub fn bearer_for_id(&self, user_id: i64) -> String {
        format!("Bearer {}", self.tokens.issue_access_token(user_id).unwrap())
    }
}

/// Initialise the full application over the context's mock stores
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(pd_api::create_app(
            $ctx.state.clone(),
            $crate::common::MAX_PAYLOAD,
        ))
        .await
    };
}

pub fn decimal(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}
