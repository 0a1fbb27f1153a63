//! 领域服务模块

mod address_parser;
mod address_validator;

pub use address_parser::{
    AddressParseError, AddressParser, MAX_BIN_LENGTH, ParseMode, SEGMENT_COUNT, parse_address,
};
pub use address_validator::{AddressValidator, ValidationOutcome};
