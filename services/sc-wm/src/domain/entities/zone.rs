//! 库区实体

use common::types::{AuditInfo, TenantId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LayoutError, ZoneId, is_location_code};

use super::{BinData, StorageStructure};

/// 库区实体
///
/// 仓库下的命名分区，拥有自己的存储结构和编码格式。
/// 二维布局数据（画布坐标、标注等）只随库区保存，本模块不解释其内容。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    id: ZoneId,
    tenant_id: TenantId,
    /// 所属仓库编码
    warehouse_code: String,
    /// 库区编码
    code: String,
    name: String,
    structure: StorageStructure,
    /// 二维布局数据
    layout: Option<serde_json::Value>,
    audit_info: AuditInfo,
}

impl Zone {
    /// 创建新的库区
    ///
    /// 仓库编码和库区编码统一转为大写，并且必须能出现在可解析的地址中
    pub fn new(
        tenant_id: TenantId,
        warehouse_code: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        let warehouse_code = normalize_code(warehouse_code.into())?;
        let code = normalize_code(code.into())?;

        Ok(Self {
            id: ZoneId::new(),
            tenant_id,
            warehouse_code,
            code,
            name: name.into(),
            structure: StorageStructure::default(),
            layout: None,
            audit_info: AuditInfo::default(),
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn warehouse_code(&self) -> &str {
        &self.warehouse_code
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn structure(&self) -> &StorageStructure {
        &self.structure
    }

    pub fn layout(&self) -> Option<&serde_json::Value> {
        self.layout.as_ref()
    }

    pub fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    // ========== Builder pattern setters ==========

    pub fn with_structure(mut self, structure: StorageStructure) -> Self {
        self.structure = structure;
        self
    }

    pub fn with_layout(mut self, layout: serde_json::Value) -> Self {
        self.layout = Some(layout);
        self
    }

    // ========== Mutable setters ==========

    /// 整体替换存储结构
    pub fn replace_structure(&mut self, structure: StorageStructure, user_id: Option<UserId>) {
        self.structure = structure;
        self.audit_info.update(user_id);
    }

    /// 整体替换二维布局
    pub fn replace_layout(&mut self, layout: Option<serde_json::Value>, user_id: Option<UserId>) {
        self.layout = layout;
        self.audit_info.update(user_id);
    }

    // ========== 地址 ==========

    /// 展开库区内全部货位
    pub fn bin_data(&self) -> Result<Vec<BinData>, LayoutError> {
        self.structure
            .generate_bin_data(&self.warehouse_code, &self.code)
    }

    /// 展开库区内全部货位地址
    pub fn addresses(&self) -> Result<Vec<String>, LayoutError> {
        self.structure
            .generate_all_addresses(&self.warehouse_code, &self.code)
    }
}

fn normalize_code(code: String) -> Result<String, LayoutError> {
    let code = code.trim().to_uppercase();
    if !is_location_code(&code) {
        return Err(LayoutError::InvalidCode(code));
    }
    Ok(code)
}
