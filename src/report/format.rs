// ==========================================
// 车队审计报告系统 - 字段格式化工具
// ==========================================
// 职责: 报告中所有字段的统一格式化规则
// 规则: 时间类字段缺失时输出 N/A,其他可选字段由调用方省略
// ==========================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 缺失值占位
pub const NOT_AVAILABLE: &str = "N/A";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// 枚举令牌美化: 下划线转空格,每个单词首字母大写、其余小写
///
/// # 示例
/// - "gps_mismatch" -> "Gps Mismatch"
/// - "FUEL_LEVEL_drop" -> "Fuel Level Drop"
pub fn prettify_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev_alpha = false;

    for ch in token.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

/// 金额: 货币符号 + 两位小数
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// 置信度: 分数限定在 [0, 1],× 100 后截断取整
pub fn format_percent(fraction: f64) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    format!("{}%", (fraction * 100.0).trunc() as i64)
}

pub fn format_gallons(gallons: f64) -> String {
    format!("{:.1}", gallons)
}

/// 分钟数取整（单位由渲染器按语言追加）
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.0}", minutes)
}

pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_date(value: Option<&NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_time(value: Option<&NaiveTime>) -> String {
    value
        .map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
