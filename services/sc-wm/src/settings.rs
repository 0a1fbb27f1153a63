//! 服务配置
//!
//! 将 `config` 中的原始编码配置转换为领域对象

use config::AddressingConfig;
pub use config::{AppConfig, ConfigError};

use crate::domain::enums::{BinDirection, BinLabeling};
use crate::domain::services::AddressParser;
use crate::domain::value_objects::{FormatConfig, LayoutError};

impl TryFrom<&AddressingConfig> for FormatConfig {
    type Error = LayoutError;

    fn try_from(config: &AddressingConfig) -> Result<Self, Self::Error> {
        let bin_labeling =
            BinLabeling::from_code(&config.bin_labeling).ok_or_else(|| LayoutError::UnknownSetting {
                field: "bin_labeling",
                value: config.bin_labeling.clone(),
            })?;
        let bin_direction = BinDirection::from_code(&config.bin_direction).ok_or_else(|| {
            LayoutError::UnknownSetting {
                field: "bin_direction",
                value: config.bin_direction.clone(),
            }
        })?;

        FormatConfig::new(
            config.separator,
            config.aisle_digits,
            config.shelf_digits,
            bin_labeling,
            bin_direction,
        )
    }
}

/// 按配置创建解析器
///
/// `heuristic` 不使用编码格式；`format` 使用配置的默认编码格式精确解析
pub fn parser_from_config(config: &AddressingConfig) -> Result<AddressParser, LayoutError> {
    match config.parse_mode.trim().to_lowercase().as_str() {
        "heuristic" => Ok(AddressParser::heuristic()),
        "format" => Ok(AddressParser::for_format(FormatConfig::try_from(config)?)),
        other => Err(LayoutError::UnknownSetting {
            field: "parse_mode",
            value: other.to_string(),
        }),
    }
}
