// ==========================================
// 车队审计报告系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 扁平 JSON 对象文件 (key -> value)
// 优先级: 运行时覆写 > 配置文件 > 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::report_config::ReportConfig;
use crate::i18n;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 输出目录环境变量
pub const OUTPUT_DIR_ENV: &str = "FLEET_AUDIT_REPORT_DIR";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 仅使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径（顶层为对象,值为字符串/数字/布尔）
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let manager = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), keys = manager.values.len(), "配置文件加载完成");
        Ok(manager)
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let root: Value = serde_json::from_str(raw)?;
        let map = match root {
            Value::Object(map) => map,
            _ => return Err(ConfigError::Parse("配置文件顶层必须为对象".to_string())),
        };

        let mut values = HashMap::new();
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ConfigError::InvalidValue {
                        key,
                        value: other.to_string(),
                        message: "配置值必须为标量".to_string(),
                    })
                }
            };

            if !config_keys::ALL.contains(&key.as_str()) {
                warn!(key = %key, "未知配置项,已忽略");
                continue;
            }
            values.insert(key, text);
        }

        Ok(Self { values })
    }

    /// 运行时覆写（如命令行参数）
    pub fn set_config_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 读取显式配置值（不含默认值）
    pub fn get_global_config_value(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_global_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_company_name(&self) -> String {
        self.get_config_or_default(config_keys::COMPANY_NAME, defaults::COMPANY_NAME)
    }

    pub fn get_output_dir(&self) -> PathBuf {
        self.get_global_config_value(config_keys::OUTPUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir)
    }

    /// 默认报告周期天数（1..=366）
    pub fn get_lookback_days(&self) -> ConfigResult<u32> {
        let raw = match self.get_global_config_value(config_keys::LOOKBACK_DAYS) {
            Some(v) => v,
            None => return Ok(defaults::LOOKBACK_DAYS),
        };

        match raw.parse::<u32>() {
            Ok(days) if (1..=366).contains(&days) => Ok(days),
            _ => Err(ConfigError::InvalidValue {
                key: config_keys::LOOKBACK_DAYS.to_string(),
                value: raw,
                message: "必须为 1~366 之间的整数".to_string(),
            }),
        }
    }

    pub fn get_locale(&self) -> ConfigResult<String> {
        let locale = self.get_config_or_default(config_keys::LOCALE, i18n::DEFAULT_LOCALE);
        if !i18n::is_supported(&locale) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::LOCALE.to_string(),
                value: locale,
                message: format!("支持的语言: {}", i18n::SUPPORTED_LOCALES.join(", ")),
            });
        }
        Ok(locale)
    }

    pub fn get_currency_symbol(&self) -> String {
        self.get_config_or_default(config_keys::CURRENCY_SYMBOL, defaults::CURRENCY_SYMBOL)
    }

    /// 获取所有生效配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let config = self.to_report_config()?;
        let mut snapshot: BTreeMap<&str, Value> = BTreeMap::new();
        snapshot.insert(config_keys::COMPANY_NAME, Value::from(config.company_name));
        snapshot.insert(
            config_keys::OUTPUT_DIR,
            Value::from(config.output_dir.display().to_string()),
        );
        snapshot.insert(config_keys::LOOKBACK_DAYS, Value::from(config.lookback_days));
        snapshot.insert(config_keys::LOCALE, Value::from(config.locale));
        snapshot.insert(config_keys::CURRENCY_SYMBOL, Value::from(config.currency_symbol));
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// 校验并转换为强类型配置
    pub fn to_report_config(&self) -> ConfigResult<ReportConfig> {
        Ok(ReportConfig {
            company_name: self.get_company_name(),
            output_dir: self.get_output_dir(),
            lookback_days: self.get_lookback_days()?,
            locale: self.get_locale()?,
            currency_symbol: self.get_currency_symbol(),
        })
    }
}

/// 默认输出目录
///
/// 优先级: 环境变量 > 用户数据目录 > ./reports
pub fn default_output_dir() -> PathBuf {
    if let Ok(path) = std::env::var(OUTPUT_DIR_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("fleet-audit-report").join("reports"))
        .unwrap_or_else(|| PathBuf::from("reports"))
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const COMPANY_NAME: &str = "company_name";
    pub const OUTPUT_DIR: &str = "output_dir";
    pub const LOOKBACK_DAYS: &str = "lookback_days";
    pub const LOCALE: &str = "locale";
    pub const CURRENCY_SYMBOL: &str = "currency_symbol";

    pub const ALL: &[&str] = &[
        COMPANY_NAME,
        OUTPUT_DIR,
        LOOKBACK_DAYS,
        LOCALE,
        CURRENCY_SYMBOL,
    ];
}

// ==========================================
// 内置默认值
// ==========================================
pub mod defaults {
    pub const COMPANY_NAME: &str = "Fleet Company";
    pub const LOOKBACK_DAYS: u32 = 7;
    pub const CURRENCY_SYMBOL: &str = "$";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::new();
        let config = manager.to_report_config().unwrap();
        assert_eq!(config.company_name, "Fleet Company");
        assert_eq!(config.lookback_days, 7);
        assert_eq!(config.locale, "en");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_scalars_are_stringified() {
        let manager =
            ConfigManager::from_json_str(r#"{"lookback_days": 14, "company_name": "Acme", "locale": null}"#)
                .unwrap();
        assert_eq!(manager.get_lookback_days().unwrap(), 14);
        assert_eq!(manager.get_company_name(), "Acme");
        assert_eq!(manager.get_locale().unwrap(), "en");
    }

    #[test]
    fn test_non_scalar_value_rejected() {
        let err = ConfigManager::from_json_str(r#"{"company_name": ["a"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "company_name"));
    }

    #[test]
    fn test_lookback_days_range() {
        let mut manager = ConfigManager::new();
        manager.set_config_value(config_keys::LOOKBACK_DAYS, "0");
        assert!(manager.get_lookback_days().is_err());

        manager.set_config_value(config_keys::LOOKBACK_DAYS, "abc");
        assert!(manager.get_lookback_days().is_err());

        manager.set_config_value(config_keys::LOOKBACK_DAYS, "30");
        assert_eq!(manager.get_lookback_days().unwrap(), 30);
    }

    #[test]
    fn test_unsupported_locale() {
        let mut manager = ConfigManager::new();
        manager.set_config_value(config_keys::LOCALE, "fr");
        assert!(manager.to_report_config().is_err());
    }

    #[test]
    fn test_blank_override_falls_back() {
        let mut manager = ConfigManager::new();
        manager.set_config_value(config_keys::COMPANY_NAME, "   ");
        assert_eq!(manager.get_company_name(), "Fleet Company");
    }
}
