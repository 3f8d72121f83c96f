// ==========================================
// 车队审计报告系统 - 数据上下文加载器
// ==========================================
// 职责: JSON -> ReportContext
// 规则: 结构性字段（violations 及其序列）缺失/错误时失败,
//       记录内的可选字段一律宽松解码
// ==========================================

use crate::context::error::{ContextError, ContextResult};
use crate::domain::report_context::ReportContext;
use crate::domain::types::ViolationKind;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const VIOLATIONS_KEY: &str = "violations";
const SUMMARY_STATS_KEY: &str = "summary_stats";

pub struct ContextLoader;

impl ContextLoader {
    /// 从 JSON 文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> ContextResult<ReportContext> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ContextError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = raw.len(), "读取数据上下文文件");
        Self::from_json_str(&raw)
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(raw: &str) -> ContextResult<ReportContext> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// 从 JSON 值加载
    pub fn from_value(value: Value) -> ContextResult<ReportContext> {
        let mut root = match value {
            Value::Object(map) => map,
            other => {
                return Err(ContextError::InvalidStructure {
                    key: "<root>".to_string(),
                    message: format!("数据上下文必须为对象,实际为 {}", json_type_name(&other)),
                })
            }
        };

        Self::validate_violations(&root)?;
        Self::sanitize_summary_stats(&mut root);

        let context: ReportContext = serde_json::from_value(Value::Object(root))?;
        debug!(
            total = context.violations.total(),
            populated = ?context.violations.populated_kinds(),
            "数据上下文加载完成"
        );
        Ok(context)
    }

    /// 校验 violations 映射及五类序列的结构
    fn validate_violations(root: &Map<String, Value>) -> ContextResult<()> {
        let violations = match root.get(VIOLATIONS_KEY) {
            None | Some(Value::Null) => {
                return Err(ContextError::MissingStructuralKey(VIOLATIONS_KEY.to_string()))
            }
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ContextError::InvalidStructure {
                    key: VIOLATIONS_KEY.to_string(),
                    message: format!("期望映射,实际为 {}", json_type_name(other)),
                })
            }
        };

        for kind in ViolationKind::ALL {
            let key = format!("{}.{}", VIOLATIONS_KEY, kind.key());
            let records = match violations.get(kind.key()) {
                None | Some(Value::Null) => continue,
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(ContextError::InvalidStructure {
                        key,
                        message: format!("期望序列,实际为 {}", json_type_name(other)),
                    })
                }
            };

            if let Some((idx, bad)) = records.iter().enumerate().find(|(_, r)| !r.is_object()) {
                return Err(ContextError::InvalidStructure {
                    key: format!("{}[{}]", key, idx),
                    message: format!("期望记录对象,实际为 {}", json_type_name(bad)),
                });
            }
        }

        for extra in violations
            .keys()
            .filter(|k| k.parse::<ViolationKind>().is_err())
        {
            debug!(key = %extra, "忽略未知违规类别");
        }

        Ok(())
    }

    /// summary_stats 不是对象（含 null）时按缺失处理（计数全部为 0）
    fn sanitize_summary_stats(root: &mut Map<String, Value>) {
        match root.get(SUMMARY_STATS_KEY) {
            None | Some(Value::Object(_)) => {}
            Some(Value::Null) => {
                root.remove(SUMMARY_STATS_KEY);
            }
            Some(other) => {
                warn!(
                    found = json_type_name(other),
                    "summary_stats 不是对象,按缺失处理"
                );
                root.remove(SUMMARY_STATS_KEY);
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
