//! sc-wm - 仓库库位编码
//!
//! 库位地址的生成、解析与校验：
//! - [`domain::FormatConfig`] 地址编码格式
//! - [`domain::StorageStructure`] 库区结构及货位展开
//! - [`domain::AddressParser`] 地址解析
//! - [`domain::AddressValidator`] 地址校验（解析 + 外部货位查询）

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod settings;

use std::sync::Arc;

use errors::{AppError, AppResult};
use tracing::{info, warn};

use application::ServiceHandler;
use settings::{AppConfig, parser_from_config};
use domain::repositories::BinRepository;

/// 加载配置、初始化日志并创建服务处理器
pub fn bootstrap(config_dir: &str, bin_repo: Arc<dyn BinRepository>) -> AppResult<ServiceHandler> {
    let config = AppConfig::load(config_dir)
        .map_err(|e| AppError::internal(format!("加载配置失败: {}", e)))?;

    if let Err(e) = telemetry::init_from_config(&config.telemetry) {
        warn!("Tracing already initialized: {}", e);
    }

    let parser = parser_from_config(&config.addressing)?;
    info!(
        "{} ({}) started with {:?} address parsing",
        config.app_name,
        config.app_env,
        parser.mode()
    );

    Ok(ServiceHandler::new(bin_repo).with_parser(parser))
}
