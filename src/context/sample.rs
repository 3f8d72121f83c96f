// ==========================================
// 车队审计报告系统 - 演示数据上下文
// ==========================================
// 用途: CLI sample 命令、渲染冒烟测试
// ==========================================

use crate::domain::report_context::{ReportContext, SummaryStats};
use crate::domain::violation::{
    AfterHoursRecord, FuelTheftRecord, GhostJobRecord, IdleAbuseRecord, Violations,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const SAMPLE_COMPANY_NAME: &str = "Sample Fleet Company";

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, min, 0))
}

/// 演示违规数据（四类各一条,燃油异常为空）
pub fn sample_violations() -> Violations {
    Violations {
        fuel_theft: vec![FuelTheftRecord {
            vehicle_id: Some("TRUCK-001".to_string()),
            timestamp: at(2024, 1, 15, 14, 30),
            location: Some("Shell Station - Main St".to_string()),
            gallons: Some(25.5),
            amount: None,
            detection_method: Some("gps_mismatch".to_string()),
            confidence: None,
            description: Some(
                "Fuel purchase of 25.5 gallons with no GPS activity within 1 miles and 15 minutes"
                    .to_string(),
            ),
        }],
        fuel_anomalies: Vec::new(),
        ghost_jobs: vec![GhostJobRecord {
            job_id: Some("JOB-2024-001".to_string()),
            driver_id: Some("DRIVER-003".to_string()),
            scheduled_time: at(2024, 1, 16, 9, 0),
            address: Some("123 Customer Ave, City, ST".to_string()),
            description: Some(
                "No GPS activity found near job site during scheduled time window".to_string(),
            ),
        }],
        idle_abuse: vec![IdleAbuseRecord {
            vehicle_id: Some("TRUCK-002".to_string()),
            start_time: at(2024, 1, 17, 11, 15),
            end_time: at(2024, 1, 17, 11, 45),
            duration_minutes: Some(30.0),
            description: Some("Vehicle was idle for extended period".to_string()),
        }],
        after_hours_driving: vec![AfterHoursRecord {
            vehicle_id: Some("TRUCK-001".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 18),
            first_violation_time: NaiveTime::from_hms_opt(22, 30, 0),
            last_violation_time: NaiveTime::from_hms_opt(23, 45, 0),
            total_records: Some(15),
            description: Some("Vehicle activity detected outside authorized hours".to_string()),
        }],
    }
}

/// 演示数据上下文（日期标签由生成器补齐）
pub fn sample_context() -> ReportContext {
    let violations = sample_violations();
    let summary_stats = SummaryStats::from_violations(&violations);

    ReportContext {
        company_name: Some(SAMPLE_COMPANY_NAME.to_string()),
        start_date: Some("2024-01-15".to_string()),
        end_date: Some("2024-01-18".to_string()),
        generated_date: None,
        summary_stats,
        violations,
    }
}
