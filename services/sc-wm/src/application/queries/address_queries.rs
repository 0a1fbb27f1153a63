//! Address queries

use common::types::TenantId;

use crate::domain::value_objects::FormatConfig;

/// 解析地址查询
#[derive(Debug, Clone)]
pub struct ParseAddressQuery {
    pub address: String,
    /// 已知库区编码格式时按格式精确解析
    pub format: Option<FormatConfig>,
}

/// 校验地址查询
#[derive(Debug, Clone)]
pub struct ValidateAddressQuery {
    pub tenant_id: TenantId,
    pub address: String,
}
