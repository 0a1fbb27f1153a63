//! 解析后的库位地址

use serde::{Deserialize, Serialize};

/// 解析后的库位地址
///
/// 仅作为解析结果存在，不持久化
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    /// 仓库编码（2-5 位字母数字）
    pub warehouse_code: String,
    /// 库区编码（2-5 位字母数字）
    pub zone_code: String,
    pub aisle: u32,
    pub shelf: u32,
    /// 货位标签（1-2 位字母数字）
    pub bin: String,
    /// 实际使用的分隔符
    pub separator: char,
    /// 规范化后的地址（大写、去空白，以原分隔符重新拼接）
    pub normalized_address: String,
}

impl ParsedAddress {
    /// 巷道与货架是否与给定坐标一致
    pub fn matches_position(&self, aisle: u32, shelf: u32) -> bool {
        self.aisle == aisle && self.shelf == shelf
    }
}

impl std::fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized_address)
    }
}
