//! 领域错误到应用错误的映射
//!
//! 地址格式错误属于用户输入错误，库区配置错误属于前置条件错误，两者分别映射

use errors::AppError;

use crate::domain::services::AddressParseError;
use crate::domain::value_objects::LayoutError;

impl From<AddressParseError> for AppError {
    fn from(err: AddressParseError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<LayoutError> for AppError {
    fn from(err: LayoutError) -> Self {
        AppError::failed_precondition(err.to_string())
    }
}
