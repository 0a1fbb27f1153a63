//! 内存货位存储
//!
//! 用于测试和嵌入式场景，按租户隔离，地址大小写不敏感

use std::collections::HashMap;

use async_trait::async_trait;
use common::types::TenantId;
use errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::entities::{BinData, BinReference};
use crate::domain::repositories::BinRepository;
use crate::domain::value_objects::BinId;

// ============================================================================
// BinRepository 实现
// ============================================================================

#[derive(Default)]
pub struct InMemoryBinRepository {
    /// 租户 -> 大写地址 -> 货位
    bins: RwLock<HashMap<TenantId, HashMap<String, BinReference>>>,
}

impl InMemoryBinRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记单个货位，地址已存在时返回原有引用
    pub async fn insert(&self, tenant_id: &TenantId, address: &str) -> BinReference {
        let mut bins = self.bins.write().await;
        bins.entry(tenant_id.clone())
            .or_default()
            .entry(address.trim().to_uppercase())
            .or_insert_with(|| BinReference::new(BinId::new(), address.trim()))
            .clone()
    }

    /// 批量登记库区展开的货位
    pub async fn provision(&self, tenant_id: &TenantId, bins: &[BinData]) -> Vec<BinReference> {
        let mut references = Vec::with_capacity(bins.len());
        for bin in bins {
            references.push(self.insert(tenant_id, &bin.address).await);
        }
        references
    }

    /// 租户下的货位数量
    pub async fn count(&self, tenant_id: &TenantId) -> usize {
        self.bins
            .read()
            .await
            .get(tenant_id)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl BinRepository for InMemoryBinRepository {
    async fn find_by_address(
        &self,
        normalized_address: &str,
        tenant_id: &TenantId,
    ) -> AppResult<Option<BinReference>> {
        let key = normalized_address.trim().to_uppercase();
        Ok(self
            .bins
            .read()
            .await
            .get(tenant_id)
            .and_then(|bins| bins.get(&key))
            .cloned())
    }
}
