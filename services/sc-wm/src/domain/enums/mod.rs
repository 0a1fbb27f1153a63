//! 枚举模块

mod bin_direction;
mod bin_labeling;

pub use bin_direction::BinDirection;
pub use bin_labeling::BinLabeling;
