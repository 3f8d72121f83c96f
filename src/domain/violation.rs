// ==========================================
// 车队审计报告系统 - 违规记录
// ==========================================
// 职责: 五类违规记录的数据结构
// 红线: 除序列本身外,所有字段均为可选
// ==========================================

use crate::context::lenient;
use crate::domain::types::{Severity, ViolationKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// ==========================================
// 燃油盗窃
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelTheftRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub vehicle_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::datetime")]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub gallons: Option<f64>,

    /// 金额（美元）
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,

    /// 检测方式令牌,如 gps_mismatch
    #[serde(default, deserialize_with = "lenient::text")]
    pub detection_method: Option<String>,

    /// 置信度,取值 [0, 1]
    #[serde(default, deserialize_with = "lenient::number")]
    pub confidence: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

// ==========================================
// 燃油异常
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelAnomalyRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub vehicle_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::datetime")]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub anomaly_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub gallons: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub severity: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl FuelAnomalyRecord {
    pub fn severity_level(&self) -> Option<Severity> {
        self.severity.as_deref().map(Severity::parse_lenient)
    }
}

// ==========================================
// 虚假工单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GhostJobRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub driver_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::datetime")]
    pub scheduled_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

// ==========================================
// 怠速滥用
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdleAbuseRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub vehicle_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::datetime")]
    pub start_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient::datetime")]
    pub end_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub duration_minutes: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

// ==========================================
// 非工作时间行驶
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AfterHoursRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub vehicle_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::time")]
    pub first_violation_time: Option<NaiveTime>,

    #[serde(default, deserialize_with = "lenient::time")]
    pub last_violation_time: Option<NaiveTime>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub total_records: Option<u64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

// ==========================================
// Violations - 五类违规序列
// ==========================================
// 缺失或为 null 的序列按空序列处理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Violations {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub fuel_theft: Vec<FuelTheftRecord>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub fuel_anomalies: Vec<FuelAnomalyRecord>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub ghost_jobs: Vec<GhostJobRecord>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub idle_abuse: Vec<IdleAbuseRecord>,

    #[serde(default, deserialize_with = "lenient::seq")]
    pub after_hours_driving: Vec<AfterHoursRecord>,
}

impl Violations {
    /// 某一类别的记录数
    pub fn len_of(&self, kind: ViolationKind) -> usize {
        match kind {
            ViolationKind::FuelTheft => self.fuel_theft.len(),
            ViolationKind::FuelAnomalies => self.fuel_anomalies.len(),
            ViolationKind::GhostJobs => self.ghost_jobs.len(),
            ViolationKind::IdleAbuse => self.idle_abuse.len(),
            ViolationKind::AfterHoursDriving => self.after_hours_driving.len(),
        }
    }

    /// 全部记录数
    pub fn total(&self) -> usize {
        ViolationKind::ALL.iter().map(|k| self.len_of(*k)).sum()
    }

    /// 五类序列是否全部为空
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// 非空类别（固定顺序）
    pub fn populated_kinds(&self) -> Vec<ViolationKind> {
        ViolationKind::ALL
            .iter()
            .copied()
            .filter(|k| self.len_of(*k) > 0)
            .collect()
    }

    /// 所有带车辆编号的记录中的车辆编号（含重复）
    pub fn vehicle_ids(&self) -> impl Iterator<Item = &str> {
        self.fuel_theft
            .iter()
            .filter_map(|r| r.vehicle_id.as_deref())
            .chain(
                self.fuel_anomalies
                    .iter()
                    .filter_map(|r| r.vehicle_id.as_deref()),
            )
            .chain(self.idle_abuse.iter().filter_map(|r| r.vehicle_id.as_deref()))
            .chain(
                self.after_hours_driving
                    .iter()
                    .filter_map(|r| r.vehicle_id.as_deref()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_sequences_are_empty() {
        let v: Violations =
            serde_json::from_value(json!({"fuel_theft": null, "ghost_jobs": []})).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.total(), 0);
        assert!(v.populated_kinds().is_empty());
    }

    #[test]
    fn test_record_with_invalid_optional_fields() {
        let r: FuelTheftRecord = serde_json::from_value(json!({
            "vehicle_id": "TRUCK-001",
            "timestamp": "yesterday-ish",
            "amount": "lots",
            "confidence": 0.9
        }))
        .unwrap();

        assert_eq!(r.vehicle_id.as_deref(), Some("TRUCK-001"));
        assert_eq!(r.timestamp, None);
        assert_eq!(r.amount, None);
        assert_eq!(r.confidence, Some(0.9));
        assert_eq!(r.location, None);
    }

    #[test]
    fn test_populated_kinds_keep_fixed_order() {
        let v = Violations {
            after_hours_driving: vec![AfterHoursRecord::default()],
            fuel_theft: vec![FuelTheftRecord::default()],
            ..Default::default()
        };
        assert_eq!(
            v.populated_kinds(),
            vec![ViolationKind::FuelTheft, ViolationKind::AfterHoursDriving]
        );
        assert_eq!(v.len_of(ViolationKind::AfterHoursDriving), 1);
    }

    #[test]
    fn test_after_hours_times_accept_datetimes() {
        let r: AfterHoursRecord = serde_json::from_value(json!({
            "vehicle_id": "TRUCK-001",
            "date": "2024-01-18",
            "first_violation_time": "2024-01-18 22:30:00",
            "last_violation_time": "23:45",
            "total_records": 15
        }))
        .unwrap();

        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 1, 18));
        assert_eq!(r.first_violation_time, NaiveTime::from_hms_opt(22, 30, 0));
        assert_eq!(r.last_violation_time, NaiveTime::from_hms_opt(23, 45, 0));
        assert_eq!(r.total_records, Some(15));
    }
}
