// ==========================================
// 车队审计报告系统 - 数据上下文层
// ==========================================
// 职责: 读取外部审计系统提供的数据上下文（JSON）
// 支持: 文件 / 文本 / serde_json::Value
// ==========================================

pub mod error;
pub mod lenient;
pub mod loader;
pub mod sample;
pub mod timestamp;

// 重导出核心类型
pub use error::{ContextError, ContextResult};
pub use loader::ContextLoader;
pub use sample::{sample_context, sample_violations, SAMPLE_COMPANY_NAME};
