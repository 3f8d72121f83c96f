// ==========================================
// 车队审计报告系统 - 报告数据上下文
// ==========================================
// 职责: 渲染器的输入（汇总统计 + 违规序列 + 标签）
// 规则: 缺失的计数按 0 读取,缺失的标签渲染为 N/A
// ==========================================

use crate::context::lenient;
use crate::domain::types::ViolationKind;
use crate::domain::violation::Violations;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// SummaryStats - 汇总统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_violations: Option<u64>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub vehicles_with_violations: Option<u64>,

    /// 类别键 -> 数量（键集合不限于已知类别）
    #[serde(default, deserialize_with = "lenient::count_map")]
    pub violations_by_type: BTreeMap<String, u64>,
}

impl SummaryStats {
    pub fn total(&self) -> u64 {
        self.total_violations.unwrap_or(0)
    }

    pub fn vehicles(&self) -> u64 {
        self.vehicles_with_violations.unwrap_or(0)
    }

    /// 按类别读取数量,缺失为 0
    pub fn count_for(&self, kind: ViolationKind) -> u64 {
        self.violations_by_type
            .get(kind.key())
            .copied()
            .unwrap_or(0)
    }

    /// 由违规序列推导汇总统计
    ///
    /// # 规则
    /// - total: 全部记录数
    /// - vehicles: 去重后的非空车辆编号数（虚假工单无车辆编号,不计入）
    /// - by_type: 各非空类别的记录数
    pub fn from_violations(violations: &Violations) -> Self {
        let vehicles: BTreeSet<&str> = violations.vehicle_ids().collect();

        let violations_by_type = violations
            .populated_kinds()
            .into_iter()
            .map(|kind| (kind.key().to_string(), violations.len_of(kind) as u64))
            .collect();

        Self {
            total_violations: Some(violations.total() as u64),
            vehicles_with_violations: Some(vehicles.len() as u64),
            violations_by_type,
        }
    }
}

// ==========================================
// ReportContext - 渲染上下文
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub generated_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary_stats: SummaryStats,

    /// 必需的结构性字段
    pub violations: Violations,
}

impl ReportContext {
    pub fn new(violations: Violations, summary_stats: SummaryStats) -> Self {
        Self {
            violations,
            summary_stats,
            ..Default::default()
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
