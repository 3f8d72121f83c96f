// ==========================================
// 车队审计报告系统 - 领域类型定义
// ==========================================
// 违规类别与严重程度
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 违规类别 (Violation Kind)
// ==========================================
// 红线: 报告中的类别顺序固定,与输入顺序无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    FuelTheft,         // 燃油盗窃
    FuelAnomalies,     // 燃油异常
    GhostJobs,         // 虚假工单
    IdleAbuse,         // 怠速滥用
    AfterHoursDriving, // 非工作时间行驶
}

impl ViolationKind {
    /// 固定渲染顺序
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::FuelTheft,
        ViolationKind::FuelAnomalies,
        ViolationKind::GhostJobs,
        ViolationKind::IdleAbuse,
        ViolationKind::AfterHoursDriving,
    ];

    /// 数据上下文中的键名
    pub fn key(&self) -> &'static str {
        match self {
            ViolationKind::FuelTheft => "fuel_theft",
            ViolationKind::FuelAnomalies => "fuel_anomalies",
            ViolationKind::GhostJobs => "ghost_jobs",
            ViolationKind::IdleAbuse => "idle_abuse",
            ViolationKind::AfterHoursDriving => "after_hours_driving",
        }
    }

    /// 章节标题图标
    pub fn icon(&self) -> &'static str {
        match self {
            ViolationKind::FuelTheft => "\u{26FD}",
            ViolationKind::FuelAnomalies => "\u{1F4CA}",
            ViolationKind::GhostJobs => "\u{1F47B}",
            ViolationKind::IdleAbuse => "\u{23F1}",
            ViolationKind::AfterHoursDriving => "\u{1F319}",
        }
    }

    /// CSS 类名（与键名一致,下划线改为连字符）
    pub fn css_class(&self) -> &'static str {
        match self {
            ViolationKind::FuelTheft => "fuel-theft",
            ViolationKind::FuelAnomalies => "fuel-anomalies",
            ViolationKind::GhostJobs => "ghost-jobs",
            ViolationKind::IdleAbuse => "idle-abuse",
            ViolationKind::AfterHoursDriving => "after-hours-driving",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ViolationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViolationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s.trim())
            .ok_or_else(|| format!("未知违规类别: {}", s))
    }
}

// ==========================================
// 严重程度 (Severity)
// ==========================================
// 仅用于燃油异常卡片的样式选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Unknown,
}

impl Severity {
    /// 宽松解析,无法识别的值归为 Unknown
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" | "moderate" => Severity::Medium,
            "high" | "critical" => Severity::High,
            _ => Severity::Unknown,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
            Severity::Unknown => "severity-unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
