//! 库位地址编码格式值对象

use serde::{Deserialize, Serialize};

use crate::domain::enums::{BinDirection, BinLabeling};

use super::LayoutError;

/// 巷道/货架编号的最大补零位数
pub const MAX_DIGITS: u8 = 5;

/// 地址解析器可识别的分隔符，按检测优先级排列
pub const SUPPORTED_SEPARATORS: [char; 3] = ['-', '.', '_'];

/// 数字标签的最大值，货位段最多两位
pub const MAX_BIN_NUMBER: u32 = 99;

const LETTER_COUNT: u32 = 26;

/// 库位地址编码格式
///
/// 地址形如 `FAB-EST-102-B`：仓库编码、库区编码、巷道+货架编号、货位标签。
///
/// 业务规则:
/// - 巷道、货架位数在 1 到 [`MAX_DIGITS`] 之间，表示最小补零宽度而非截断宽度
/// - 分隔符必须是解析器可识别的字符，保证生成的地址都能被解析
/// - 货位标签最多两位：字母 A-Z，数字 1-99
/// - 创建后不可变，修改时整体替换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFormatConfig")]
pub struct FormatConfig {
    separator: char,
    aisle_digits: u8,
    shelf_digits: u8,
    bin_labeling: BinLabeling,
    bin_direction: BinDirection,
}

impl FormatConfig {
    /// 创建新的编码格式
    pub fn new(
        separator: char,
        aisle_digits: u8,
        shelf_digits: u8,
        bin_labeling: BinLabeling,
        bin_direction: BinDirection,
    ) -> Result<Self, LayoutError> {
        if !SUPPORTED_SEPARATORS.contains(&separator) {
            return Err(LayoutError::UnsupportedSeparator(separator));
        }
        check_digits("aisle", aisle_digits)?;
        check_digits("shelf", shelf_digits)?;

        Ok(Self {
            separator,
            aisle_digits,
            shelf_digits,
            bin_labeling,
            bin_direction,
        })
    }

    // ========== Getters ==========

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn aisle_digits(&self) -> u8 {
        self.aisle_digits
    }

    pub fn shelf_digits(&self) -> u8 {
        self.shelf_digits
    }

    pub fn bin_labeling(&self) -> BinLabeling {
        self.bin_labeling
    }

    pub fn bin_direction(&self) -> BinDirection {
        self.bin_direction
    }

    // ========== 替换 ==========

    pub fn with_separator(self, separator: char) -> Result<Self, LayoutError> {
        Self::new(
            separator,
            self.aisle_digits,
            self.shelf_digits,
            self.bin_labeling,
            self.bin_direction,
        )
    }

    pub fn with_digits(self, aisle_digits: u8, shelf_digits: u8) -> Result<Self, LayoutError> {
        Self::new(
            self.separator,
            aisle_digits,
            shelf_digits,
            self.bin_labeling,
            self.bin_direction,
        )
    }

    pub fn with_bin_labeling(mut self, bin_labeling: BinLabeling) -> Self {
        self.bin_labeling = bin_labeling;
        self
    }

    pub fn with_bin_direction(mut self, bin_direction: BinDirection) -> Self {
        self.bin_direction = bin_direction;
        self
    }

    // ========== 格式化 ==========

    /// 巷道编号补零，超出宽度时原样输出
    pub fn format_aisle(&self, aisle: u32) -> String {
        pad(aisle, self.aisle_digits)
    }

    /// 货架编号补零，超出宽度时原样输出
    pub fn format_shelf(&self, shelf: u32) -> String {
        pad(shelf, self.shelf_digits)
    }

    /// 将货架内从 0 开始的货位序号转换为标签
    pub fn format_position(
        &self,
        position_index: u32,
        total_positions: u32,
    ) -> Result<String, LayoutError> {
        if position_index >= total_positions {
            return Err(LayoutError::PositionOutOfRange {
                index: position_index,
                total: total_positions,
            });
        }

        let index = self.bin_direction.apply(position_index, total_positions);
        match self.bin_labeling {
            BinLabeling::Letters => {
                if index >= LETTER_COUNT {
                    return Err(LayoutError::LetterIndexOverflow(index));
                }
                Ok(char::from(b'A' + index as u8).to_string())
            }
            BinLabeling::Numbers => {
                let number = index + 1;
                if number > MAX_BIN_NUMBER {
                    return Err(LayoutError::BinNumberOverflow(number));
                }
                Ok(number.to_string())
            }
        }
    }

    /// 检查每层货位数能否全部渲染为标签
    ///
    /// 返回的错误与渲染超出范围的第一个标签时一致
    pub fn check_positions(&self, total_positions: u32) -> Result<(), LayoutError> {
        match self.bin_labeling {
            BinLabeling::Letters if total_positions > LETTER_COUNT => {
                Err(LayoutError::LetterIndexOverflow(total_positions - 1))
            }
            BinLabeling::Numbers if total_positions > MAX_BIN_NUMBER => {
                Err(LayoutError::BinNumberOverflow(total_positions))
            }
            _ => Ok(()),
        }
    }

    /// 将货位标签还原为从 0 开始的货位序号
    pub fn position_index(&self, label: &str, total_positions: u32) -> Result<u32, LayoutError> {
        let label = label.trim().to_uppercase();
        let invalid = || LayoutError::InvalidBinLabel(label.clone());

        let index = match self.bin_labeling {
            BinLabeling::Letters => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => c as u32 - 'A' as u32,
                    _ => return Err(invalid()),
                }
            }
            BinLabeling::Numbers => {
                let number: u32 = label.parse().map_err(|_| invalid())?;
                number.checked_sub(1).ok_or_else(invalid)?
            }
        };

        if index >= total_positions {
            return Err(LayoutError::PositionOutOfRange {
                index,
                total: total_positions,
            });
        }

        // 反转映射与正向映射相同
        Ok(self.bin_direction.apply(index, total_positions))
    }

    /// 生成完整库位地址
    ///
    /// 地址渲染的唯一入口，解析器必须能还原其输出
    pub fn generate_address(
        &self,
        warehouse_code: &str,
        zone_code: &str,
        aisle: u32,
        shelf: u32,
        position_index: u32,
        total_positions: u32,
    ) -> Result<String, LayoutError> {
        let bin = self.format_position(position_index, total_positions)?;
        Ok(self.compose_address(warehouse_code, zone_code, aisle, shelf, &bin))
    }

    /// 用已渲染的货位标签拼接地址
    pub fn compose_address(
        &self,
        warehouse_code: &str,
        zone_code: &str,
        aisle: u32,
        shelf: u32,
        bin: &str,
    ) -> String {
        let position = format!("{}{}", self.format_aisle(aisle), self.format_shelf(shelf));
        let separator = self.separator.to_string();

        [warehouse_code, zone_code, position.as_str(), bin].join(separator.as_str())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: '-',
            aisle_digits: 1,
            shelf_digits: 2,
            bin_labeling: BinLabeling::Letters,
            bin_direction: BinDirection::BottomUp,
        }
    }
}

fn check_digits(field: &'static str, value: u8) -> Result<(), LayoutError> {
    if value == 0 || value > MAX_DIGITS {
        return Err(LayoutError::InvalidDigitWidth {
            field,
            value,
            max: MAX_DIGITS,
        });
    }
    Ok(())
}

fn pad(value: u32, width: u8) -> String {
    format!("{:0width$}", value, width = width as usize)
}

/// 反序列化中间结构，缺省字段取默认格式
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFormatConfig {
    #[serde(default = "default_separator")]
    separator: char,
    #[serde(default = "default_aisle_digits")]
    aisle_digits: u8,
    #[serde(default = "default_shelf_digits")]
    shelf_digits: u8,
    #[serde(default)]
    bin_labeling: BinLabeling,
    #[serde(default)]
    bin_direction: BinDirection,
}

fn default_separator() -> char {
    FormatConfig::default().separator
}

fn default_aisle_digits() -> u8 {
    FormatConfig::default().aisle_digits
}

fn default_shelf_digits() -> u8 {
    FormatConfig::default().shelf_digits
}

impl TryFrom<RawFormatConfig> for FormatConfig {
    type Error = LayoutError;

    fn try_from(raw: RawFormatConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.separator,
            raw.aisle_digits,
            raw.shelf_digits,
            raw.bin_labeling,
            raw.bin_direction,
        )
    }
}
