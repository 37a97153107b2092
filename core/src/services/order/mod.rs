//! Order workflow: checkout, listing and status changes

mod service;


pub use service::OrderService;
