//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// 库区 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ZoneId(pub Uuid);

impl ZoneId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ZoneId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// 货位 ID（由外部货位存储分配，对本模块不透明）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct BinId(pub Uuid);

impl BinId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for BinId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BinId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
