//! Zone layout commands

use common::types::{TenantId, UserId};
use errors::{AppError, AppResult};

use crate::domain::entities::StructureProps;
use crate::domain::value_objects::is_location_code;

/// 展开库区货位命令
#[derive(Debug, Clone)]
pub struct GenerateZoneBinsCommand {
    pub tenant_id: TenantId,
    pub user_id: UserId,
    pub warehouse_code: String,
    pub zone_code: String,
    pub structure: StructureProps,
}

impl GenerateZoneBinsCommand {
    pub fn validate(&self) -> AppResult<()> {
        if !is_location_code(self.warehouse_code.trim()) {
            return Err(AppError::validation("仓库编码必须为 2-5 位字母或数字"));
        }
        if !is_location_code(self.zone_code.trim()) {
            return Err(AppError::validation("库区编码必须为 2-5 位字母或数字"));
        }
        Ok(())
    }
}
