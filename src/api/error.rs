// ==========================================
// 车队审计报告系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换下层错误为用户可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::context::ContextError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 数据上下文错误
    // ==========================================
    /// 缺少必需的结构字段（渲染失败,需由上游修正数据）
    #[error("数据上下文缺少必需字段: {0}")]
    MissingStructuralKey(String),

    #[error("数据上下文无效: {0}")]
    InvalidContext(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("报告写入失败: {0}")]
    ReportWriteError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 ContextError 转换
// ==========================================
impl From<ContextError> for ApiError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::FileNotFound(path) => ApiError::NotFound(format!("数据上下文文件{}", path)),
            ContextError::MissingStructuralKey(key) => ApiError::MissingStructuralKey(key),
            ContextError::InvalidStructure { key, message } => {
                ApiError::InvalidContext(format!("{}: {}", key, message))
            }
            ContextError::JsonParseError(msg) => ApiError::InvalidContext(msg),
            ContextError::FileReadError(msg) => ApiError::InternalError(msg),
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::FileNotFound(path) => ApiError::NotFound(format!("配置文件{}", path)),
            other => ApiError::ConfigError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ReportWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
