//! 仓库/库区编码规则

/// 编码最小长度
pub const MIN_CODE_LENGTH: usize = 2;
/// 编码最大长度
pub const MAX_CODE_LENGTH: usize = 5;

/// 是否为合法的仓库或库区编码（2 到 5 位 ASCII 字母或数字）
pub fn is_location_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}
