// ==========================================
// 车队审计报告系统 - 领域模型层
// ==========================================
// 职责: 定义报告数据上下文、违规记录、类别类型
// 红线: 不含文件读取逻辑,不含渲染逻辑
// ==========================================

pub mod report_context;
pub mod types;
pub mod violation;

// 重导出核心类型
pub use report_context::{ReportContext, SummaryStats};
pub use types::{Severity, ViolationKind};
pub use violation::{
    AfterHoursRecord, FuelAnomalyRecord, FuelTheftRecord, GhostJobRecord, IdleAbuseRecord,
    Violations,
};
