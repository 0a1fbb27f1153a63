//! Business logic handler

use std::sync::Arc;

use errors::AppResult;
use metrics::counter;
use tracing::{info, warn};

use crate::domain::entities::{BinData, StorageStructure, Zone};
use crate::domain::repositories::BinRepository;
use crate::domain::services::{AddressParser, AddressValidator, ValidationOutcome};
use crate::domain::value_objects::ParsedAddress;

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    parser: AddressParser,
    validator: AddressValidator,
}

impl ServiceHandler {
    pub fn new(bin_repo: Arc<dyn BinRepository>) -> Self {
        Self {
            parser: AddressParser::heuristic(),
            validator: AddressValidator::new(bin_repo),
        }
    }

    /// 替换默认解析器（同时用于地址校验）
    pub fn with_parser(mut self, parser: AddressParser) -> Self {
        self.parser = parser;
        self.validator = self.validator.with_parser(parser);
        self
    }

    // ========== 地址解析与校验 ==========

    /// 解析地址
    pub async fn parse_address(&self, query: ParseAddressQuery) -> AppResult<ParsedAddress> {
        let parser = query
            .format
            .map(AddressParser::for_format)
            .unwrap_or(self.parser);

        match parser.parse(&query.address) {
            Ok(parsed) => {
                counter!("address_parse_total", "result" => "ok").increment(1);
                Ok(parsed)
            }
            Err(e) => {
                counter!("address_parse_total", "result" => "error").increment(1);
                Err(e.into())
            }
        }
    }

    /// 校验地址格式并确认货位存在
    pub async fn validate_address(&self, query: ValidateAddressQuery) -> AppResult<ValidationOutcome> {
        self.validator
            .validate(&query.tenant_id, &query.address)
            .await
    }

    // ========== 库区货位展开 ==========

    /// 按库区结构展开全部货位
    pub async fn generate_zone_bins(&self, cmd: GenerateZoneBinsCommand) -> AppResult<Vec<BinData>> {
        info!(
            "Generating bins for zone {}/{} of tenant: {}",
            cmd.warehouse_code, cmd.zone_code, cmd.tenant_id
        );

        // 1. 验证命令
        cmd.validate()?;

        // 2. 规范化结构
        let structure = StorageStructure::from_props(cmd.structure)?;
        if !structure.is_configured() {
            warn!(
                "Zone {}/{} has no bins configured",
                cmd.warehouse_code, cmd.zone_code
            );
        }

        // 3. 展开
        let zone = Zone::new(cmd.tenant_id, cmd.warehouse_code, cmd.zone_code, "")?
            .with_structure(structure);
        let bins = self.list_zone_bins(&zone)?;

        info!(
            "Generated {} bins ({} shelves) for zone {}/{}",
            bins.len(),
            zone.structure().total_shelves(),
            zone.warehouse_code(),
            zone.code()
        );
        Ok(bins)
    }

    /// 展开已有库区的全部货位
    pub fn list_zone_bins(&self, zone: &Zone) -> AppResult<Vec<BinData>> {
        let bins = zone.bin_data()?;
        counter!("zone_bins_generated_total").increment(bins.len() as u64);
        Ok(bins)
    }

    /// 展开已有库区的全部货位地址
    pub fn list_zone_addresses(&self, zone: &Zone) -> AppResult<Vec<String>> {
        Ok(self
            .list_zone_bins(zone)?
            .into_iter()
            .map(|bin| bin.address)
            .collect())
    }
}
