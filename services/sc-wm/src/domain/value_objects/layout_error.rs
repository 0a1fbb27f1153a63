//! 库区配置错误

use thiserror::Error;

/// 库区结构或编码格式配置错误
///
/// 表示库区设置本身无效，而不是用户输入的地址无效
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{field} 位数必须在 1 到 {max} 之间，实际为 {value}")]
    InvalidDigitWidth {
        field: &'static str,
        value: u8,
        max: u8,
    },
    #[error("不支持的分隔符 '{0}'，只允许 '-'、'.'、'_'")]
    UnsupportedSeparator(char),
    #[error("货位序号 {index} 超出货架货位数 {total}")]
    PositionOutOfRange { index: u32, total: u32 },
    #[error("字母标签只支持 26 个货位，序号 {0} 无法转换")]
    LetterIndexOverflow(u32),
    #[error("数字标签最多两位，货位号 {0} 超出 99")]
    BinNumberOverflow(u32),
    #[error("无效的货位标签: {0}")]
    InvalidBinLabel(String),
    #[error("巷道编号必须从 1 开始")]
    InvalidAisleNumber,
    #[error("巷道编号 {0} 重复")]
    DuplicateAisle(u32),
    #[error("编码必须为 2 到 5 位字母或数字: {0}")]
    InvalidCode(String),
    #[error("未知的配置值 {field}: {value}")]
    UnknownSetting { field: &'static str, value: String },
}
