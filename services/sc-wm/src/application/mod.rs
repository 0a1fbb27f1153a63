//! 应用层

pub mod commands;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use handler::ServiceHandler;
pub use queries::*;
