//! 货位编号方向枚举

use serde::{Deserialize, Serialize};

/// 货位编号方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinDirection {
    /// 序号 0 对应最下方的物理货位
    #[default]
    BottomUp,
    /// 序号 0 对应最上方的物理货位
    TopDown,
}

impl BinDirection {
    /// 将货位序号映射为标签序号
    ///
    /// 调用方保证 `index < total`
    pub fn apply(&self, index: u32, total: u32) -> u32 {
        match self {
            BinDirection::BottomUp => index,
            BinDirection::TopDown => total - 1 - index,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('-', "_").as_str() {
            "bottom_up" => Some(BinDirection::BottomUp),
            "top_down" => Some(BinDirection::TopDown),
            _ => None,
        }
    }
}
