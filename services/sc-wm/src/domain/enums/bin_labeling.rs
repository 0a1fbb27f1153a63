//! 货位标签方式枚举

use serde::{Deserialize, Serialize};

/// 货位标签方式
///
/// 决定货架内从 0 开始的货位序号如何转换为标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinLabeling {
    /// 字母 (A, B, C ...)
    #[default]
    Letters,
    /// 从 1 开始的数字
    Numbers,
}

impl BinLabeling {
    /// 获取配置代码
    pub fn code(&self) -> &'static str {
        match self {
            BinLabeling::Letters => "letters",
            BinLabeling::Numbers => "numbers",
        }
    }

    /// 从配置代码创建
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "letters" => Some(BinLabeling::Letters),
            "numbers" => Some(BinLabeling::Numbers),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinLabeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
