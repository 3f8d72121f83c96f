// ==========================================
// 车队审计报告系统 - 核心库
// ==========================================
// 输入: 外部审计系统提供的数据上下文（JSON）
// 输出: 自包含 HTML 审计报告
// 系统定位: 纯渲染步骤（不含违规检测、数据采集、投递）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 数据上下文与违规记录
pub mod domain;

// 上下文层 - JSON 加载与宽松解码
pub mod context;

// 报告层 - 格式化与 HTML 渲染
pub mod report;

// 配置层 - 报告配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AfterHoursRecord, FuelAnomalyRecord, FuelTheftRecord, GhostJobRecord, IdleAbuseRecord,
    ReportContext, Severity, SummaryStats, ViolationKind, Violations,
};

pub use context::{ContextError, ContextLoader};

pub use report::{HtmlRenderer, RenderOptions, ReportGenerator, ReportRequest};

pub use config::{ConfigManager, ReportConfig};

pub use api::{ApiError, ApiResult, RenderRequest, ReportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Fleet Audit Report";
