// ==========================================
// 测试辅助模块 - 数据上下文构建器
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use fleet_audit_report::domain::{
    AfterHoursRecord, FuelAnomalyRecord, FuelTheftRecord, GhostJobRecord, IdleAbuseRecord,
    ReportContext, SummaryStats, Violations,
};
use fleet_audit_report::{HtmlRenderer, RenderOptions};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// 固定的"当前时间",保证默认日期范围可断言
pub fn fixed_now() -> NaiveDateTime {
    at(2024, 1, 21, 18, 0)
}

pub fn render(ctx: &ReportContext) -> String {
    HtmlRenderer::new(RenderOptions::default()).render(ctx)
}

/// 区块标题的 HTML 片段,用于断言类别顺序
pub fn section_title(label: &str) -> String {
    format!("{} (", label)
}

// ==========================================
// FuelTheftRecord 构建器
// ==========================================

pub struct FuelTheftBuilder {
    record: FuelTheftRecord,
}

impl FuelTheftBuilder {
    pub fn new(vehicle_id: &str) -> Self {
        Self {
            record: FuelTheftRecord {
                vehicle_id: Some(vehicle_id.to_string()),
                timestamp: Some(at(2024, 1, 15, 14, 30)),
                location: Some("Shell Station - Main St".to_string()),
                description: Some("Fuel purchase with no GPS activity nearby".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn gallons(mut self, gallons: f64) -> Self {
        self.record.gallons = Some(gallons);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.record.amount = Some(amount);
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.record.confidence = Some(confidence);
        self
    }

    pub fn detection_method(mut self, method: &str) -> Self {
        self.record.detection_method = Some(method.to_string());
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.record.timestamp = None;
        self
    }

    pub fn build(self) -> FuelTheftRecord {
        self.record
    }
}

// ==========================================
// 其他类别的单条记录
// ==========================================

pub fn fuel_anomaly(vehicle_id: &str) -> FuelAnomalyRecord {
    FuelAnomalyRecord {
        vehicle_id: Some(vehicle_id.to_string()),
        timestamp: Some(at(2024, 1, 16, 7, 45)),
        anomaly_type: Some("rapid_fuel_drop".to_string()),
        location: Some("Depot 4".to_string()),
        gallons: Some(12.0),
        severity: Some("high".to_string()),
        description: Some("Tank level fell 40% while parked".to_string()),
    }
}

pub fn ghost_job(job_id: &str) -> GhostJobRecord {
    GhostJobRecord {
        job_id: Some(job_id.to_string()),
        driver_id: Some("DRIVER-003".to_string()),
        scheduled_time: Some(at(2024, 1, 16, 9, 0)),
        address: Some("123 Customer Ave, City, ST".to_string()),
        description: Some("No GPS activity near job site".to_string()),
    }
}

pub fn idle_abuse(vehicle_id: &str) -> IdleAbuseRecord {
    IdleAbuseRecord {
        vehicle_id: Some(vehicle_id.to_string()),
        start_time: Some(at(2024, 1, 17, 11, 15)),
        end_time: Some(at(2024, 1, 17, 11, 45)),
        duration_minutes: Some(30.0),
        description: None,
    }
}

pub fn after_hours(vehicle_id: &str) -> AfterHoursRecord {
    AfterHoursRecord {
        vehicle_id: Some(vehicle_id.to_string()),
        date: NaiveDate::from_ymd_opt(2024, 1, 18),
        first_violation_time: Some(at(2024, 1, 18, 22, 30).time()),
        last_violation_time: Some(at(2024, 1, 18, 23, 45).time()),
        total_records: Some(15),
        description: None,
    }
}

/// 五类各一条
pub fn all_categories() -> Violations {
    Violations {
        fuel_theft: vec![FuelTheftBuilder::new("TRUCK-001").build()],
        fuel_anomalies: vec![fuel_anomaly("TRUCK-004")],
        ghost_jobs: vec![ghost_job("JOB-2024-001")],
        idle_abuse: vec![idle_abuse("TRUCK-002")],
        after_hours_driving: vec![after_hours("TRUCK-001")],
    }
}

pub fn context_with(violations: Violations) -> ReportContext {
    ReportContext {
        company_name: Some("Acme Logistics".to_string()),
        start_date: Some("2024-01-15".to_string()),
        end_date: Some("2024-01-21".to_string()),
        generated_date: Some("2024-01-21 18:00:00".to_string()),
        summary_stats: SummaryStats::from_violations(&violations),
        violations,
    }
}
