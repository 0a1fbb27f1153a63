//! Queries module

mod address_queries;

pub use address_queries::*;
