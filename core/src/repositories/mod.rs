//! Repository interfaces, one per aggregate.
//!
//! Concrete store implementations live in the infrastructure crate. The
//! in-memory mocks are compiled for tests and behind the
//! `mock-repositories` feature.

pub mod order;
pub mod pizza;
pub mod user;

pub use order::OrderRepository;
pub use pizza::PizzaRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock-repositories"))]
pub use order::MockOrderRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use pizza::MockPizzaRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use user::MockUserRepository;
