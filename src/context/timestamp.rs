// ==========================================
// 车队审计报告系统 - 时间字段解析
// ==========================================
// 职责: 将上游系统导出的各种日期/时间写法解析为 chrono 类型
// 规则: 无法解析的值视同缺失（渲染为 N/A）,不报错
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

// 日期时间格式（按优先级尝试,月/日在前）
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M:%S %p",
    "%Y-%m-%d %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %I:%M %p",
    "%Y-%m-%d %I:%M %p",
    "%m-%d-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
    "%d-%m-%Y %H:%M",
    "%m-%d-%Y %I:%M %p",
    "%d-%m-%Y %I:%M %p",
    "%Y%m%d %H:%M:%S",
    "%Y%m%d %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M %p",
];

// 纯日期格式
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%y",
];

// 纯时间格式
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%H.%M.%S",
    "%H.%M",
];

// 大于该值的数字按毫秒时间戳处理
const EPOCH_MILLIS_THRESHOLD: f64 = 100_000_000_000.0;

/// 解析日期时间字符串
///
/// 依次尝试 RFC 3339、带时间的格式、纯日期格式（补 00:00）。
pub fn parse_datetime_str(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date_only(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 解析日期字符串（带时间部分时取日期）
pub fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    parse_date_only(s).or_else(|| parse_datetime_str(s).map(|dt| dt.date()))
}

/// 解析时间字符串（带日期部分时取时间）
pub fn parse_time_str(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }

    parse_datetime_str(s).map(|dt| dt.time())
}

/// 从 JSON 值解析日期时间
///
/// 支持字符串与 UNIX 时间戳（秒或毫秒）,其他类型视同缺失。
pub fn parse_datetime_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_datetime_str(s),
        Value::Number(n) => n.as_f64().and_then(parse_epoch),
        _ => None,
    }
}

/// 从 JSON 值解析日期
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n.as_f64().and_then(parse_epoch).map(|dt| dt.date()),
        _ => None,
    }
}

/// 从 JSON 值解析时间
pub fn parse_time_value(value: &Value) -> Option<NaiveTime> {
    match value {
        Value::String(s) => parse_time_str(s),
        Value::Number(n) => n.as_f64().and_then(parse_epoch).map(|dt| dt.time()),
        _ => None,
    }
}

fn parse_date_only(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_epoch(value: f64) -> Option<NaiveDateTime> {
    if !value.is_finite() {
        return None;
    }

    let secs = if value.abs() >= EPOCH_MILLIS_THRESHOLD {
        value / 1000.0
    } else {
        value
    };

    DateTime::from_timestamp(secs.trunc() as i64, 0).map(|dt| dt.naive_utc())
}
