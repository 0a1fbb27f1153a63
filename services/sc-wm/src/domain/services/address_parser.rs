//! 库位地址解析
//!
//! 把人工输入的地址（如 `fab-est-102-b`）还原为仓库、库区、巷道、货架和货位。
//! 解析按固定顺序逐步校验，任何一步失败立即返回，不回溯。

use thiserror::Error;

use crate::domain::enums::BinLabeling;
use crate::domain::value_objects::{
    FormatConfig, ParsedAddress, SUPPORTED_SEPARATORS, is_location_code,
};

/// 地址段数
pub const SEGMENT_COUNT: usize = 4;

/// 货位标签最大长度
pub const MAX_BIN_LENGTH: usize = 2;

/// 地址格式错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("地址中未找到分隔符，支持 '-'、'.'、'_'")]
    NoSeparator,
    #[error("地址必须由 {expected} 部分组成（以 '{separator}' 分隔），实际为 {found} 部分")]
    SegmentCount {
        expected: usize,
        found: usize,
        separator: char,
    },
    #[error("仓库编码必须为 2-5 位字母或数字: '{value}'（长度 {length}）")]
    InvalidWarehouseCode { value: String, length: usize },
    #[error("库区编码必须为 2-5 位字母或数字: '{value}'（长度 {length}）")]
    InvalidZoneCode { value: String, length: usize },
    #[error("巷道货架编号不能为空")]
    EmptyPosition,
    #[error("巷道货架编号只能包含数字: '{0}'")]
    NonNumericPosition(String),
    #[error("巷道货架编号 '{value}' 至少需要 {min} 位数字")]
    PositionTooShort { value: String, min: usize },
    #[error("巷道货架编号超出范围: '{0}'")]
    PositionOverflow(String),
    #[error("货位编码必须为 1-2 位字母或数字: '{value}'（长度 {length}）")]
    InvalidBinCode { value: String, length: usize },
    #[error("货位编码 '{value}' 与库区标签方式 {labeling} 不符")]
    BinLabelMismatch { value: String, labeling: BinLabeling },
}

/// 解析模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// 未知编码格式：自动检测分隔符，按编号长度推断巷道/货架位数
    #[default]
    Heuristic,
    /// 已知库区编码格式：使用其分隔符和货架位数精确拆分
    Format(FormatConfig),
}

/// 库位地址解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressParser {
    mode: ParseMode,
}

impl AddressParser {
    /// 启发式解析器（不需要编码格式）
    pub fn heuristic() -> Self {
        Self {
            mode: ParseMode::Heuristic,
        }
    }

    /// 按库区编码格式解析
    pub fn for_format(format: FormatConfig) -> Self {
        Self {
            mode: ParseMode::Format(format),
        }
    }

    pub fn mode(&self) -> &ParseMode {
        &self.mode
    }

    /// 解析地址
    pub fn parse(&self, address: &str) -> Result<ParsedAddress, AddressParseError> {
        let normalized = address.trim().to_uppercase();

        let separator = self.detect_separator(&normalized)?;

        let segments: Vec<&str> = normalized.split(separator).collect();
        let [warehouse_code, zone_code, position, bin] = segments.as_slice() else {
            return Err(AddressParseError::SegmentCount {
                expected: SEGMENT_COUNT,
                found: segments.len(),
                separator,
            });
        };

        if !is_location_code(warehouse_code) {
            return Err(AddressParseError::InvalidWarehouseCode {
                value: warehouse_code.to_string(),
                length: warehouse_code.chars().count(),
            });
        }
        if !is_location_code(zone_code) {
            return Err(AddressParseError::InvalidZoneCode {
                value: zone_code.to_string(),
                length: zone_code.chars().count(),
            });
        }

        let (aisle, shelf) = self.split_position(position)?;
        self.check_bin(bin)?;

        Ok(ParsedAddress {
            warehouse_code: warehouse_code.to_string(),
            zone_code: zone_code.to_string(),
            aisle,
            shelf,
            bin: bin.to_string(),
            separator,
            normalized_address: segments.join(separator.to_string().as_str()),
        })
    }

    /// 检测分隔符，按 `-`、`.`、`_` 顺序取第一个出现的
    fn detect_separator(&self, address: &str) -> Result<char, AddressParseError> {
        let found = match self.mode {
            ParseMode::Heuristic => SUPPORTED_SEPARATORS
                .into_iter()
                .find(|sep| address.contains(*sep)),
            ParseMode::Format(format) => {
                Some(format.separator()).filter(|sep| address.contains(*sep))
            }
        };
        found.ok_or(AddressParseError::NoSeparator)
    }

    /// 拆分巷道和货架编号
    ///
    /// 启发式规则只看长度：不超过 3 位时巷道占 1 位，否则巷道占 2 位，其余为货架。
    /// 按格式解析时货架固定占末尾的 `shelf_digits` 位。
    fn split_position(&self, position: &str) -> Result<(u32, u32), AddressParseError> {
        if position.is_empty() {
            return Err(AddressParseError::EmptyPosition);
        }
        if !position.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddressParseError::NonNumericPosition(position.to_string()));
        }

        let len = position.len();
        let aisle_len = match self.mode {
            ParseMode::Heuristic => {
                if len < 2 {
                    return Err(AddressParseError::PositionTooShort {
                        value: position.to_string(),
                        min: 2,
                    });
                }
                if len <= 3 { 1 } else { 2 }
            }
            ParseMode::Format(format) => {
                let shelf_len = usize::from(format.shelf_digits());
                if len <= shelf_len {
                    return Err(AddressParseError::PositionTooShort {
                        value: position.to_string(),
                        min: shelf_len + 1,
                    });
                }
                len - shelf_len
            }
        };

        let (aisle, shelf) = position.split_at(aisle_len);
        let overflow = || AddressParseError::PositionOverflow(position.to_string());
        Ok((
            aisle.parse().map_err(|_| overflow())?,
            shelf.parse().map_err(|_| overflow())?,
        ))
    }

    fn check_bin(&self, bin: &str) -> Result<(), AddressParseError> {
        let length = bin.chars().count();
        if !(1..=MAX_BIN_LENGTH).contains(&length) || !bin.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(AddressParseError::InvalidBinCode {
                value: bin.to_string(),
                length,
            });
        }

        if let ParseMode::Format(format) = self.mode {
            let matches = match format.bin_labeling() {
                BinLabeling::Letters => length == 1 && bin.chars().all(|c| c.is_ascii_uppercase()),
                BinLabeling::Numbers => bin.chars().all(|c| c.is_ascii_digit()),
            };
            if !matches {
                return Err(AddressParseError::BinLabelMismatch {
                    value: bin.to_string(),
                    labeling: format.bin_labeling(),
                });
            }
        }

        Ok(())
    }
}

/// 启发式解析地址
pub fn parse_address(address: &str) -> Result<ParsedAddress, AddressParseError> {
    AddressParser::heuristic().parse(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::BinDirection;

    #[test]
    fn test_parse_lowercase_input() {
        let parsed = parse_address("  fab-est-102-b ").unwrap();
        assert_eq!(parsed.warehouse_code, "FAB");
        assert_eq!(parsed.zone_code, "EST");
        assert_eq!(parsed.aisle, 1);
        assert_eq!(parsed.shelf, 2);
        assert_eq!(parsed.bin, "B");
        assert_eq!(parsed.separator, '-');
        assert_eq!(parsed.normalized_address, "FAB-EST-102-B");
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(
            parse_address("FABEST102B"),
            Err(AddressParseError::NoSeparator)
        );
        assert_eq!(parse_address("   "), Err(AddressParseError::NoSeparator));
    }

    #[test]
    fn test_segment_count() {
        let err = parse_address("FAB-EST-102").unwrap_err();
        assert_eq!(
            err,
            AddressParseError::SegmentCount {
                expected: 4,
                found: 3,
                separator: '-'
            }
        );
        assert!(err.to_string().contains('4'));

        assert!(matches!(
            parse_address("FAB-EST-1-02-B"),
            Err(AddressParseError::SegmentCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_separator_priority() {
        // '-' 优先于 '.'，按 '-' 拆分后只剩 3 段
        assert!(matches!(
            parse_address("FAB.EST-102-B"),
            Err(AddressParseError::SegmentCount { found: 3, separator: '-', .. })
        ));
        // 4 段时 '.' 留在仓库编码中
        assert!(matches!(
            parse_address("FAB.EST-1-102-B"),
            Err(AddressParseError::InvalidWarehouseCode { length: 7, .. })
        ));
        // 只有 '.' 时使用 '.'
        let parsed = parse_address("fab.est.102.b").unwrap();
        assert_eq!(parsed.separator, '.');
        assert_eq!(parsed.normalized_address, "FAB.EST.102.B");
        // '_' 优先级最低
        let parsed = parse_address("FAB_EST_0305_12").unwrap();
        assert_eq!(parsed.separator, '_');
        assert_eq!((parsed.aisle, parsed.shelf), (3, 5));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(matches!(
            parse_address("F-EST-102-B"),
            Err(AddressParseError::InvalidWarehouseCode { length: 1, .. })
        ));
        assert!(matches!(
            parse_address("FAB-ESTANT-102-B"),
            Err(AddressParseError::InvalidZoneCode { length: 6, .. })
        ));
        assert!(matches!(
            parse_address("FAB-E$T-102-B"),
            Err(AddressParseError::InvalidZoneCode { .. })
        ));
    }

    #[test]
    fn test_position_errors() {
        assert_eq!(
            parse_address("FAB-EST--B"),
            Err(AddressParseError::EmptyPosition)
        );
        assert_eq!(
            parse_address("FAB-EST-1A2-B"),
            Err(AddressParseError::NonNumericPosition("1A2".to_string()))
        );
        assert!(matches!(
            parse_address("FAB-EST-7-B"),
            Err(AddressParseError::PositionTooShort { min: 2, .. })
        ));
        assert!(matches!(
            parse_address("FAB-EST-1299999999999-B"),
            Err(AddressParseError::PositionOverflow(_))
        ));
    }

    #[test]
    fn test_position_heuristic_by_length() {
        let cases = [
            ("12", (1, 2)),
            ("102", (1, 2)),
            ("1502", (15, 2)),
            ("12345", (12, 345)),
            ("015", (0, 15)),
        ];
        for (position, expected) in cases {
            let parsed = parse_address(&format!("FAB-EST-{position}-A")).unwrap();
            assert_eq!((parsed.aisle, parsed.shelf), expected, "position {position}");
        }
    }

    #[test]
    fn test_bin_errors() {
        assert!(matches!(
            parse_address("FAB-EST-102-ABC"),
            Err(AddressParseError::InvalidBinCode { length: 3, .. })
        ));
        assert!(matches!(
            parse_address("FAB-EST-102-"),
            Err(AddressParseError::InvalidBinCode { length: 0, .. })
        ));
        assert!(matches!(
            parse_address("FAB-EST-102-B*"),
            Err(AddressParseError::InvalidBinCode { .. })
        ));
        assert_eq!(parse_address("FAB-EST-102-12").unwrap().bin, "12");
    }

    #[test]
    fn test_format_mode_uses_exact_widths() {
        let format = FormatConfig::default().with_digits(1, 3).unwrap();
        let parser = AddressParser::for_format(format);

        // 启发式规则会把 1502 拆成 15/02
        let parsed = parser.parse("FAB-EST-1502-B").unwrap();
        assert_eq!((parsed.aisle, parsed.shelf), (1, 502));
        let heuristic = parse_address("FAB-EST-1502-B").unwrap();
        assert_eq!((heuristic.aisle, heuristic.shelf), (15, 2));

        assert!(matches!(
            parser.parse("FAB-EST-502-B"),
            Err(AddressParseError::PositionTooShort { min: 4, .. })
        ));
    }

    #[test]
    fn test_format_mode_separator_is_fixed() {
        let format = FormatConfig::default().with_separator('.').unwrap();
        let parser = AddressParser::for_format(format);
        assert_eq!(
            parser.parse("FAB-EST-102-B"),
            Err(AddressParseError::NoSeparator)
        );
        assert_eq!(
            parser.parse("FAB.EST.102.B").unwrap().normalized_address,
            "FAB.EST.102.B"
        );
    }

    #[test]
    fn test_format_mode_checks_labeling() {
        let letters = AddressParser::for_format(FormatConfig::default());
        assert!(matches!(
            letters.parse("FAB-EST-102-12"),
            Err(AddressParseError::BinLabelMismatch { labeling: BinLabeling::Letters, .. })
        ));

        let numbers = AddressParser::for_format(
            FormatConfig::default()
                .with_bin_labeling(BinLabeling::Numbers)
                .with_bin_direction(BinDirection::TopDown),
        );
        assert_eq!(numbers.parse("FAB-EST-102-12").unwrap().bin, "12");
        assert!(matches!(
            numbers.parse("FAB-EST-102-B"),
            Err(AddressParseError::BinLabelMismatch { .. })
        ));
    }

    #[test]
    fn test_default_parser_is_heuristic() {
        assert_eq!(AddressParser::default().mode(), &ParseMode::Heuristic);
    }
}
