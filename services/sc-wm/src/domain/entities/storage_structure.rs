//! 库区存储结构

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FormatConfig, LayoutError};

use super::BinData;

/// 单个巷道的结构（不规则库区）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AisleConfig {
    /// 巷道编号，从 1 开始
    pub aisle_number: u32,
    pub shelves_count: u32,
    pub bins_per_shelf: u32,
}

impl AisleConfig {
    pub fn new(aisle_number: u32, shelves_count: u32, bins_per_shelf: u32) -> Self {
        Self {
            aisle_number,
            shelves_count,
            bins_per_shelf,
        }
    }

    pub fn total_bins(&self) -> u64 {
        u64::from(self.shelves_count) * u64::from(self.bins_per_shelf)
    }
}

/// 库区结构原始属性
///
/// 来自存储或接口的未规范化数据，可能同时包含统一计数和逐巷道配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructureProps {
    pub aisles: u32,
    pub shelves_per_aisle: u32,
    pub bins_per_shelf: u32,
    pub aisle_configs: Vec<AisleConfig>,
    pub format: FormatConfig,
}

impl StructureProps {
    /// 规范化属性
    ///
    /// - 逐巷道配置按巷道编号排序，编号必须从 1 开始且不重复
    /// - 存在逐巷道配置时，统一计数提升为不低于配置隐含的最大值，
    ///   保证只读取统一计数的旧逻辑不会少算
    ///
    /// 对已规范化的属性再次调用结果不变
    pub fn normalized(mut self) -> Result<Self, LayoutError> {
        self.aisle_configs.sort_by_key(|config| config.aisle_number);

        if self
            .aisle_configs
            .first()
            .is_some_and(|config| config.aisle_number == 0)
        {
            return Err(LayoutError::InvalidAisleNumber);
        }
        if let Some(pair) = self
            .aisle_configs
            .windows(2)
            .find(|pair| pair[0].aisle_number == pair[1].aisle_number)
        {
            return Err(LayoutError::DuplicateAisle(pair[0].aisle_number));
        }

        if !self.aisle_configs.is_empty() {
            let max_aisle = self.aisle_configs.iter().map(|c| c.aisle_number).max();
            let max_shelves = self.aisle_configs.iter().map(|c| c.shelves_count).max();
            let max_bins = self.aisle_configs.iter().map(|c| c.bins_per_shelf).max();
            let entry_count = u32::try_from(self.aisle_configs.len()).unwrap_or(u32::MAX);

            self.aisles = self
                .aisles
                .max(max_aisle.unwrap_or_default())
                .max(entry_count);
            self.shelves_per_aisle = self.shelves_per_aisle.max(max_shelves.unwrap_or_default());
            self.bins_per_shelf = self.bins_per_shelf.max(max_bins.unwrap_or_default());
        }

        Ok(self)
    }
}

/// 库区存储结构
///
/// 统一结构（巷道 × 货架 × 每层货位）或逐巷道的不规则结构，
/// 持有该库区的编码格式，可展开全部货位地址。创建后不可变，修改时整体替换。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StructureProps")]
pub struct StorageStructure {
    aisles: u32,
    shelves_per_aisle: u32,
    bins_per_shelf: u32,
    /// 按巷道编号升序
    aisle_configs: Vec<AisleConfig>,
    format: FormatConfig,
}

impl StorageStructure {
    /// 创建统一结构
    pub fn uniform(
        aisles: u32,
        shelves_per_aisle: u32,
        bins_per_shelf: u32,
        format: FormatConfig,
    ) -> Self {
        Self {
            aisles,
            shelves_per_aisle,
            bins_per_shelf,
            aisle_configs: Vec::new(),
            format,
        }
    }

    /// 创建逐巷道的不规则结构
    pub fn irregular(
        aisle_configs: Vec<AisleConfig>,
        format: FormatConfig,
    ) -> Result<Self, LayoutError> {
        Self::from_props(StructureProps {
            aisle_configs,
            format,
            ..StructureProps::default()
        })
    }

    /// 从原始属性创建（先规范化）
    pub fn from_props(props: StructureProps) -> Result<Self, LayoutError> {
        let props = props.normalized()?;
        Ok(Self {
            aisles: props.aisles,
            shelves_per_aisle: props.shelves_per_aisle,
            bins_per_shelf: props.bins_per_shelf,
            aisle_configs: props.aisle_configs,
            format: props.format,
        })
    }

    /// 导出原始属性
    pub fn to_props(&self) -> StructureProps {
        StructureProps {
            aisles: self.aisles,
            shelves_per_aisle: self.shelves_per_aisle,
            bins_per_shelf: self.bins_per_shelf,
            aisle_configs: self.aisle_configs.clone(),
            format: self.format,
        }
    }

    /// 替换编码格式，返回新结构
    pub fn with_format(&self, format: FormatConfig) -> Self {
        Self {
            format,
            ..self.clone()
        }
    }

    // ========== Getters ==========

    pub fn aisles(&self) -> u32 {
        self.aisles
    }

    pub fn shelves_per_aisle(&self) -> u32 {
        self.shelves_per_aisle
    }

    pub fn bins_per_shelf(&self) -> u32 {
        self.bins_per_shelf
    }

    pub fn aisle_configs(&self) -> &[AisleConfig] {
        &self.aisle_configs
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    // ========== 统计 ==========

    /// 是否为逐巷道的不规则结构
    pub fn is_irregular(&self) -> bool {
        !self.aisle_configs.is_empty()
    }

    /// 是否已配置出至少一个货位
    pub fn is_configured(&self) -> bool {
        if self.is_irregular() {
            self.aisle_configs
                .iter()
                .any(|c| c.shelves_count > 0 && c.bins_per_shelf > 0)
        } else {
            self.aisles > 0 && self.shelves_per_aisle > 0 && self.bins_per_shelf > 0
        }
    }

    /// 货位总数
    pub fn total_bins(&self) -> u64 {
        if self.is_irregular() {
            self.aisle_configs.iter().map(AisleConfig::total_bins).sum()
        } else {
            u64::from(self.aisles) * u64::from(self.shelves_per_aisle) * u64::from(self.bins_per_shelf)
        }
    }

    /// 货架总数
    pub fn total_shelves(&self) -> u64 {
        if self.is_irregular() {
            self.aisle_configs
                .iter()
                .map(|c| u64::from(c.shelves_count))
                .sum()
        } else {
            u64::from(self.aisles) * u64::from(self.shelves_per_aisle)
        }
    }

    /// 按巷道升序遍历每个巷道的结构，统一结构按需生成
    fn aisle_layout(&self) -> impl Iterator<Item = AisleConfig> + '_ {
        let uniform = (!self.is_irregular()).then(|| {
            (1..=self.aisles).map(move |aisle| {
                AisleConfig::new(aisle, self.shelves_per_aisle, self.bins_per_shelf)
            })
        });
        self.aisle_configs
            .iter()
            .copied()
            .chain(uniform.into_iter().flatten())
    }

    /// 展开前检查每层货位数都能渲染为标签
    fn check_positions(&self) -> Result<(), LayoutError> {
        if self.is_irregular() {
            self.aisle_configs
                .iter()
                .filter(|c| c.shelves_count > 0)
                .try_for_each(|c| self.format.check_positions(c.bins_per_shelf))
        } else {
            self.format.check_positions(self.bins_per_shelf)
        }
    }

    // ========== 展开 ==========

    /// 展开全部货位
    ///
    /// 顺序固定：巷道升序，货架从 1 升序，货位序号从 0 升序。
    /// 字母标签超过 26 个、数字标签超过 99 个货位时，在展开任何货位之前返回配置错误，
    /// 不截断也不回绕。
    pub fn generate_bin_data(
        &self,
        warehouse_code: &str,
        zone_code: &str,
    ) -> Result<Vec<BinData>, LayoutError> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        self.check_positions()?;

        let mut bins = Vec::new();
        for aisle in self.aisle_layout() {
            for shelf in 1..=aisle.shelves_count {
                for index in 0..aisle.bins_per_shelf {
                    let position = self.format.format_position(index, aisle.bins_per_shelf)?;
                    let address = self.format.compose_address(
                        warehouse_code,
                        zone_code,
                        aisle.aisle_number,
                        shelf,
                        &position,
                    );
                    bins.push(BinData {
                        address,
                        aisle: aisle.aisle_number,
                        shelf,
                        position,
                    });
                }
            }
        }

        Ok(bins)
    }

    /// 展开全部货位地址，顺序与 [`Self::generate_bin_data`] 一致
    pub fn generate_all_addresses(
        &self,
        warehouse_code: &str,
        zone_code: &str,
    ) -> Result<Vec<String>, LayoutError> {
        Ok(self
            .generate_bin_data(warehouse_code, zone_code)?
            .into_iter()
            .map(|bin| bin.address)
            .collect())
    }
}

impl Default for StorageStructure {
    fn default() -> Self {
        Self::uniform(0, 0, 0, FormatConfig::default())
    }
}

impl TryFrom<StructureProps> for StorageStructure {
    type Error = LayoutError;

    fn try_from(props: StructureProps) -> Result<Self, Self::Error> {
        Self::from_props(props)
    }
}
