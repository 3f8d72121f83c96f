// ==========================================
// 车队审计报告系统 - 报告层
// ==========================================
// 职责: 字段格式化、HTML 渲染、报告生成与落盘
// 输出: 自包含 UTF-8 HTML（可直接打印/转 PDF）
// ==========================================

pub mod format;
pub mod generator;
pub mod html;
pub mod styles;

// 重导出核心类型
pub use generator::{report_file_name, ReportGenerator, ReportRequest};
pub use html::{HtmlRenderer, RenderOptions};
