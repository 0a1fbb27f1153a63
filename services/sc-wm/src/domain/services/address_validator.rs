//! 库位地址校验服务
//!
//! 组合地址解析和外部货位查询，回答“地址格式是否正确、货位是否存在”

use std::sync::Arc;

use common::types::TenantId;
use errors::AppResult;
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::repositories::BinRepository;
use crate::domain::value_objects::BinId;

use super::AddressParser;

/// 地址校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// 格式是否正确
    pub valid: bool,
    /// 货位是否存在
    pub exists: bool,
    /// 存储中的规范地址；未找到时为规范化后的输入
    pub canonical_address: Option<String>,
    pub bin_reference: Option<BinId>,
    /// 格式错误信息
    pub error: Option<String>,
}

impl ValidationOutcome {
    fn invalid(error: String) -> Self {
        Self {
            valid: false,
            exists: false,
            canonical_address: None,
            bin_reference: None,
            error: Some(error),
        }
    }
}

/// 地址校验服务
///
/// 每次调用只做一次查询，不重试、不缓存
pub struct AddressValidator {
    bin_repo: Arc<dyn BinRepository>,
    parser: AddressParser,
}

impl AddressValidator {
    pub fn new(bin_repo: Arc<dyn BinRepository>) -> Self {
        Self {
            bin_repo,
            parser: AddressParser::heuristic(),
        }
    }

    pub fn with_parser(mut self, parser: AddressParser) -> Self {
        self.parser = parser;
        self
    }

    /// 校验地址
    ///
    /// 格式错误作为结果返回，不查询存储；只有存储本身的错误才返回 `Err`
    pub async fn validate(&self, tenant_id: &TenantId, address: &str) -> AppResult<ValidationOutcome> {
        let parsed = match self.parser.parse(address) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(address, error = %e, "Address rejected by parser");
                counter!("address_validations_total", "valid" => "false", "exists" => "false")
                    .increment(1);
                return Ok(ValidationOutcome::invalid(e.to_string()));
            }
        };

        let normalized = address.trim().to_uppercase();
        let found = self.bin_repo.find_by_address(&normalized, tenant_id).await?;
        let exists = found.is_some();

        debug!(
            address = %parsed.normalized_address,
            tenant_id = %tenant_id,
            exists,
            "Address validated"
        );
        counter!(
            "address_validations_total",
            "valid" => "true",
            "exists" => exists.to_string()
        )
        .increment(1);

        Ok(match found {
            Some(bin) => ValidationOutcome {
                valid: true,
                exists: true,
                canonical_address: Some(bin.address),
                bin_reference: Some(bin.id),
                error: None,
            },
            None => ValidationOutcome {
                valid: true,
                exists: false,
                canonical_address: Some(normalized),
                bin_reference: None,
                error: None,
            },
        })
    }
}
