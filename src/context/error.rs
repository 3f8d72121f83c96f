// ==========================================
// 车队审计报告系统 - 上下文加载错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 数据上下文加载错误
#[derive(Error, Debug)]
pub enum ContextError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("JSON 解析失败: {0}")]
    JsonParseError(String),

    // ===== 结构错误 =====
    #[error("缺少必需的结构字段: {0}")]
    MissingStructuralKey(String),

    #[error("结构字段格式错误 ({key}): {message}")]
    InvalidStructure { key: String, message: String },
}

impl From<std::io::Error> for ContextError {
    fn from(err: std::io::Error) -> Self {
        ContextError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        ContextError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ContextResult<T> = Result<T, ContextError>;
