// ==========================================
// HTML 渲染集成测试
// ==========================================
// 测试目标: 渲染输出的结构、默认值与格式化规则
// ==========================================

mod test_helpers;

use fleet_audit_report::domain::{ReportContext, SummaryStats, Violations};
use fleet_audit_report::ContextLoader;
use serde_json::json;
use test_helpers::{
    after_hours, all_categories, context_with, fuel_anomaly, ghost_job, idle_abuse, render,
    section_title, FuelTheftBuilder,
};

// ==========================================
// 无违规
// ==========================================

#[test]
fn test_empty_context_shows_no_violations_block() {
    let ctx = context_with(Violations::default());
    let html = render(&ctx);

    assert!(html.contains("class=\"no-violations\""));
    assert!(html.contains("No Violations Detected"));
    assert!(!html.contains("class=\"section-title\""));
    assert!(!html.contains("class=\"violation-card\""));
}

#[test]
fn test_populated_context_has_no_affirmation_block() {
    let html = render(&context_with(all_categories()));

    assert!(!html.contains("No Violations Detected"));
    assert_eq!(html.matches("class=\"section-title\"").count(), 5);
    assert_eq!(html.matches("class=\"violation-card\"").count(), 5);
}

// ==========================================
// 可选字段
// ==========================================

#[test]
fn test_fuel_theft_without_confidence_and_amount() {
    let violations = Violations {
        fuel_theft: vec![FuelTheftBuilder::new("TRUCK-001").build()],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<strong>Location:</strong> Shell Station - Main St"));
    assert!(html.contains("<p class=\"description\">Fuel purchase with no GPS activity nearby</p>"));
    assert!(!html.contains("<strong>Confidence:</strong>"));
    assert!(!html.contains("<strong>Cost:</strong>"));
    assert!(!html.contains("<strong>Gallons:</strong>"));
    assert!(!html.contains("<strong>Detection Method:</strong>"));
}

#[test]
fn test_fuel_theft_optional_fields_formatting() {
    let violations = Violations {
        fuel_theft: vec![FuelTheftBuilder::new("TRUCK-001")
            .gallons(25.5)
            .amount(12.5)
            .confidence(0.876)
            .detection_method("gps_mismatch")
            .build()],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<strong>Gallons:</strong> 25.5"));
    assert!(html.contains("<strong>Cost:</strong> $12.50"));
    assert!(html.contains("<strong>Confidence:</strong> 87%"));
    assert!(html.contains("<strong>Detection Method:</strong> Gps Mismatch"));
}

#[test]
fn test_missing_timestamp_renders_na() {
    let violations = Violations {
        fuel_theft: vec![FuelTheftBuilder::new("TRUCK-009").without_timestamp().build()],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<span class=\"vehicle-id\">TRUCK-009</span><span class=\"timestamp\">N/A</span>"));
}

#[test]
fn test_invalid_timestamp_is_treated_as_absent() {
    let ctx = ContextLoader::from_value(json!({
        "violations": {
            "ghost_jobs": [{"job_id": "JOB-7", "scheduled_time": "sometime tuesday"}]
        }
    }))
    .unwrap();
    let html = render(&ctx);

    assert!(html.contains(
        "<span class=\"vehicle-id\">JOB-7</span><span class=\"timestamp\">N/A</span>"
    ));
    assert!(html.contains("<strong>Driver:</strong> N/A"));
}

// ==========================================
// 汇总卡片
// ==========================================

#[test]
fn test_stat_cards_default_to_zero() {
    let ctx = ContextLoader::from_value(json!({
        "company_name": "Acme",
        "summary_stats": {"violations_by_type": {"fuel_theft": 3}},
        "violations": {}
    }))
    .unwrap();
    let html = render(&ctx);

    let card = |value: &str, label: &str| {
        format!(
            "<div class=\"stat-value\">{}</div><div class=\"stat-label\">{}</div>",
            value, label
        )
    };

    assert!(html.contains(&card("3", "Fuel Theft")));
    assert!(html.contains(&card("0", "Ghost Jobs")));
    assert!(html.contains(&card("0", "Idle Abuse")));
    assert!(html.contains(&card("0", "After Hours")));
    assert!(html.contains(&card("0", "Total Violations")));
    assert!(html.contains(&card("0", "Vehicles Flagged")));
}

#[test]
fn test_stat_cards_from_derived_summary() {
    let html = render(&context_with(all_categories()));

    assert!(html.contains(
        "<div class=\"stat-value\">5</div><div class=\"stat-label\">Total Violations</div>"
    ));
    // TRUCK-001 / TRUCK-002 / TRUCK-004
    assert!(html.contains(
        "<div class=\"stat-value\">3</div><div class=\"stat-label\">Vehicles Flagged</div>"
    ));
}

// ==========================================
// 类别顺序
// ==========================================

#[test]
fn test_sections_follow_fixed_order_regardless_of_input_order() {
    let raw = r#"{
        "violations": {
            "after_hours_driving": [{"vehicle_id": "T5", "date": "2024-01-18"}],
            "idle_abuse": [{"vehicle_id": "T4"}],
            "ghost_jobs": [{"job_id": "J3"}],
            "fuel_anomalies": [{"vehicle_id": "T2", "anomaly_type": "sensor_spike"}],
            "fuel_theft": [{"vehicle_id": "T1"}]
        }
    }"#;
    let html = render(&ContextLoader::from_json_str(raw).unwrap());

    let positions: Vec<usize> = [
        "Fuel Theft",
        "Fuel Anomalies",
        "Ghost Jobs",
        "Idle Abuse",
        "After-Hours Driving",
    ]
    .iter()
    .map(|label| {
        html.find(&section_title(label))
            .unwrap_or_else(|| panic!("missing section {}", label))
    })
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn test_only_populated_sections_render() {
    let violations = Violations {
        idle_abuse: vec![idle_abuse("TRUCK-002"), idle_abuse("TRUCK-003")],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains(&section_title("Idle Abuse")));
    assert!(html.contains("Idle Abuse (2)"));
    assert!(!html.contains(&section_title("Fuel Theft")));
    assert!(!html.contains(&section_title("Ghost Jobs")));
}

// ==========================================
// 各类别卡片内容
// ==========================================

#[test]
fn test_fuel_anomaly_card() {
    let violations = Violations {
        fuel_anomalies: vec![fuel_anomaly("TRUCK-004")],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<strong>Anomaly Type:</strong> Rapid Fuel Drop"));
    assert!(html.contains("<span class=\"severity-badge severity-high\">High</span>"));
    assert!(html.contains("<strong>Gallons:</strong> 12.0"));
    assert!(html.contains("<span class=\"timestamp\">2024-01-16 07:45</span>"));
}

#[test]
fn test_ghost_job_card() {
    let violations = Violations {
        ghost_jobs: vec![ghost_job("JOB-2024-001")],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<span class=\"vehicle-id\">JOB-2024-001</span>"));
    assert!(html.contains("<strong>Driver:</strong> DRIVER-003"));
    assert!(html.contains("<strong>Address:</strong> 123 Customer Ave, City, ST"));
    // 计划时间只在卡片头部出现一次
    assert!(html.contains("<span class=\"timestamp\">2024-01-16 09:00</span>"));
    assert_eq!(html.matches("2024-01-16 09:00").count(), 1);
    assert!(!html.contains("<strong>Scheduled:</strong>"));
}

#[test]
fn test_idle_and_after_hours_cards() {
    let violations = Violations {
        idle_abuse: vec![idle_abuse("TRUCK-002")],
        after_hours_driving: vec![after_hours("TRUCK-001")],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("<strong>Start:</strong> 2024-01-17 11:15"));
    assert!(html.contains("<strong>End:</strong> 2024-01-17 11:45"));
    assert!(html.contains("<strong>Duration:</strong> 30 minutes"));

    assert!(html.contains("<span class=\"timestamp\">2024-01-18</span>"));
    assert!(html.contains("<strong>First Violation:</strong> 22:30"));
    assert!(html.contains("<strong>Last Violation:</strong> 23:45"));
    assert!(html.contains("<strong>Total Records:</strong> 15"));
}

#[test]
fn test_after_hours_missing_count_defaults_to_zero() {
    let ctx = ContextLoader::from_value(json!({
        "violations": {"after_hours_driving": [{"vehicle_id": "TRUCK-001"}]}
    }))
    .unwrap();
    let html = render(&ctx);

    assert!(html.contains("<strong>Total Records:</strong> 0"));
    assert!(html.contains("<strong>First Violation:</strong> N/A"));
    assert!(html.contains("<span class=\"timestamp\">N/A</span>"));
}

// ==========================================
// 文档结构
// ==========================================

#[test]
fn test_header_and_footer_labels() {
    let html = render(&context_with(Violations::default()));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Fleet Audit Report - Acme Logistics</title>"));
    assert!(html.contains("<p class=\"company-name\">Acme Logistics</p>"));
    assert!(html.contains("Report Period: 2024-01-15 to 2024-01-21"));
    assert!(html.contains("Generated on 2024-01-21 18:00:00"));
}

#[test]
fn test_missing_labels_render_na() {
    let ctx = ReportContext::new(Violations::default(), SummaryStats::default());
    let html = render(&ctx);

    assert!(html.contains("<p class=\"company-name\">N/A</p>"));
    assert!(html.contains("Report Period: N/A to N/A"));
}

#[test]
fn test_document_is_self_contained_and_print_ready() {
    let html = render(&context_with(all_categories()));

    assert!(html.contains("<meta charset=\"utf-8\">"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
    assert!(html.contains("@media print"));
    assert!(html.contains("grid-template-columns: repeat(4, 1fr)"));
}

#[test]
fn test_text_is_html_escaped() {
    let violations = Violations {
        fuel_theft: vec![{
            let mut r = FuelTheftBuilder::new("<b>TRUCK</b>").build();
            r.location = Some("Pump <7> & Co".to_string());
            r
        }],
        ..Default::default()
    };
    let html = render(&context_with(violations));

    assert!(html.contains("&lt;b&gt;TRUCK&lt;/b&gt;"));
    assert!(html.contains("Pump &lt;7&gt; &amp; Co"));
    assert!(!html.contains("<b>TRUCK</b>"));
}

#[test]
fn test_null_summary_stats_renders_zero_cards() {
    let ctx = ContextLoader::from_value(json!({
        "summary_stats": null,
        "violations": {"ghost_jobs": [{"job_id": "J1"}]}
    }))
    .unwrap();
    let html = render(&ctx);

    assert!(html.contains(
        "<div class=\"stat-value\">0</div><div class=\"stat-label\">Total Violations</div>"
    ));
    assert!(html.contains(&section_title("Ghost Jobs")));
}

#[test]
fn test_out_of_range_confidence_is_clamped() {
    let ctx = ContextLoader::from_value(json!({
        "violations": {"fuel_theft": [{"vehicle_id": "TRUCK-001", "confidence": 1e308}]}
    }))
    .unwrap();
    let html = render(&ctx);

    assert!(html.contains("<strong>Confidence:</strong> 100%"));
}
