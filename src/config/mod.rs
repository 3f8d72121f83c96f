// ==========================================
// 车队审计报告系统 - 配置层
// ==========================================
// 职责: 报告配置管理,支持文件 + 运行时覆写
// 存储: JSON 配置文件 (key-value)
// ==========================================

pub mod config_manager;
pub mod error;
pub mod report_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_output_dir, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use report_config::ReportConfig;
