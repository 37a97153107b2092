//! Utility functions shared across crates

pub mod validation;
