//! Commands module

mod zone_commands;

pub use zone_commands::*;
