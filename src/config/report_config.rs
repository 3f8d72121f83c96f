// ==========================================
// 车队审计报告系统 - 报告配置
// ==========================================
// 由 ConfigManager 校验后生成的强类型配置
// ==========================================

use crate::report::html::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 报告配置（已校验）
///
/// 由 ConfigManager::to_report_config 生成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 未指定公司名时使用
    pub company_name: String,

    /// 报告输出目录
    pub output_dir: PathBuf,

    /// 未指定日期范围时,向前回溯的天数
    pub lookback_days: u32,

    /// 标签语言（en / zh-CN）
    pub locale: String,

    /// 金额前缀
    pub currency_symbol: String,
}

impl ReportConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale: self.locale.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}
