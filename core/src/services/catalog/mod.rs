//! Catalog management: listing, search and CRUD for menu products

mod service;

#[cfg(test)]
mod tests;

pub use service::PizzaService;
