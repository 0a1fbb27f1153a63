//! cuba-config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，如 `SCWM_ADDRESSING__SEPARATOR=.`
pub const ENV_PREFIX: &str = "SCWM_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 生产环境输出 JSON 日志
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 库位编码配置
///
/// 仅保存原始值，由业务服务转换为领域对象并完成校验
#[derive(Debug, Clone, Deserialize)]
pub struct AddressingConfig {
    #[serde(default = "default_separator")]
    pub separator: char,
    #[serde(default = "default_aisle_digits")]
    pub aisle_digits: u8,
    #[serde(default = "default_shelf_digits")]
    pub shelf_digits: u8,
    /// `letters` 或 `numbers`
    #[serde(default = "default_bin_labeling")]
    pub bin_labeling: String,
    /// `bottom_up` 或 `top_down`
    #[serde(default = "default_bin_direction")]
    pub bin_direction: String,
    /// `heuristic` 或 `format`
    #[serde(default = "default_parse_mode")]
    pub parse_mode: String,
}

impl Default for AddressingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            aisle_digits: default_aisle_digits(),
            shelf_digits: default_shelf_digits(),
            bin_labeling: default_bin_labeling(),
            bin_direction: default_bin_direction(),
            parse_mode: default_parse_mode(),
        }
    }
}

fn default_separator() -> char {
    '-'
}

fn default_aisle_digits() -> u8 {
    1
}

fn default_shelf_digits() -> u8 {
    2
}

fn default_bin_labeling() -> String {
    "letters".to_string()
}

fn default_bin_direction() -> String {
    "bottom_up".to_string()
}

fn default_parse_mode() -> String {
    "heuristic".to_string()
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub addressing: AddressingConfig,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        let figment = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::from_figment(figment)
    }

    /// 从已组装的 figment 提取配置
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
