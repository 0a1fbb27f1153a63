//! 货位查询接口

use async_trait::async_trait;
use common::types::TenantId;
use errors::AppResult;

use crate::domain::entities::BinReference;

/// 货位查询接口
///
/// 由外部货位存储实现。实现方负责租户隔离和大小写不敏感的精确匹配。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BinRepository: Send + Sync {
    /// 根据规范化地址查找货位
    async fn find_by_address(
        &self,
        normalized_address: &str,
        tenant_id: &TenantId,
    ) -> AppResult<Option<BinReference>>;
}
