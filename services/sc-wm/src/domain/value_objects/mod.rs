//! 值对象模块

mod format_config;
mod ids;
mod layout_error;
mod location_code;
mod parsed_address;

pub use format_config::{FormatConfig, MAX_BIN_NUMBER, MAX_DIGITS, SUPPORTED_SEPARATORS};
pub use ids::{BinId, ZoneId};
pub use layout_error::LayoutError;
pub use location_code::{MAX_CODE_LENGTH, MIN_CODE_LENGTH, is_location_code};
pub use parsed_address::ParsedAddress;
