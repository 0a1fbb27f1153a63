//! 货位记录

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BinId;

/// 库区结构展开后的单个货位
///
/// 由货位初始化流程批量写入存储
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinData {
    pub address: String,
    pub aisle: u32,
    pub shelf: u32,
    /// 货位标签
    pub position: String,
}

/// 外部货位存储返回的货位引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinReference {
    pub id: BinId,
    /// 存储中的规范地址
    pub address: String,
}

impl BinReference {
    pub fn new(id: BinId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
        }
    }
}
