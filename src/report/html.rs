// ==========================================
// 车队审计报告系统 - HTML 渲染器
// ==========================================
// 职责: ReportContext -> 自包含 HTML 文档
// 工具: maud（编译期模板,自动转义）
// ==========================================
// 规则:
// - 五类违规序列全部为空时只渲染"无违规"块,不渲染任何类别标题
// - 类别按固定顺序渲染,仅渲染非空类别
// - 时间类字段缺失渲染 N/A,其他可选字段缺失时整行省略
// ==========================================

use crate::domain::report_context::{ReportContext, SummaryStats};
use crate::domain::types::ViolationKind;
use crate::domain::violation::{
    AfterHoursRecord, FuelAnomalyRecord, FuelTheftRecord, GhostJobRecord, IdleAbuseRecord,
    Violations,
};
use crate::i18n;
use crate::report::format::{
    format_currency, format_date, format_gallons, format_minutes, format_percent, format_time,
    format_timestamp, or_na, prettify_token,
};
use crate::report::styles::REPORT_CSS;
use maud::{html, Markup, PreEscaped, DOCTYPE};

// ==========================================
// RenderOptions - 渲染选项
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: String,
    pub currency_symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

// ==========================================
// HtmlRenderer
// ==========================================
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// 渲染完整 HTML 文档
    pub fn render(&self, ctx: &ReportContext) -> String {
        self.render_markup(ctx).into_string()
    }

    pub fn render_markup(&self, ctx: &ReportContext) -> Markup {
        let company = or_na(ctx.company_name.as_deref());

        html! {
            (DOCTYPE)
            html lang=(self.options.locale) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.t("report.title")) " - " (company) }
                    style { (PreEscaped(REPORT_CSS)) }
                }
                body {
                    div class="container" {
                        (self.header(ctx))
                        (self.summary(&ctx.summary_stats))
                        @if ctx.violations.is_empty() {
                            (self.no_violations())
                        } @else {
                            @for kind in ctx.violations.populated_kinds() {
                                (self.section(kind, &ctx.violations))
                            }
                        }
                        (self.footer(ctx))
                    }
                }
            }
        }
    }

    fn t(&self, key: &str) -> String {
        i18n::t(key, &self.options.locale)
    }

    // ==========================================
    // 页面结构
    // ==========================================

    fn header(&self, ctx: &ReportContext) -> Markup {
        html! {
            header class="header" {
                h1 { (self.t("report.title")) }
                p class="company-name" { (or_na(ctx.company_name.as_deref())) }
                p class="date-range" {
                    (self.t("report.period")) ": "
                    (or_na(ctx.start_date.as_deref()))
                    " " (self.t("report.period_to")) " "
                    (or_na(ctx.end_date.as_deref()))
                }
            }
        }
    }

    fn summary(&self, stats: &SummaryStats) -> Markup {
        html! {
            section class="summary" {
                h2 { (self.t("report.summary.title")) }
                div class="stats-grid" {
                    (self.stat_card(stats.total(), "report.stats.total_violations", true))
                    (self.stat_card(stats.vehicles(), "report.stats.vehicles_flagged", false))
                    (self.stat_card(stats.count_for(ViolationKind::FuelTheft), "report.stats.fuel_theft", false))
                    (self.stat_card(stats.count_for(ViolationKind::GhostJobs), "report.stats.ghost_jobs", false))
                    (self.stat_card(stats.count_for(ViolationKind::IdleAbuse), "report.stats.idle_abuse", false))
                    (self.stat_card(stats.count_for(ViolationKind::AfterHoursDriving), "report.stats.after_hours", false))
                }
            }
        }
    }

    fn stat_card(&self, value: u64, label_key: &str, highlight: bool) -> Markup {
        let class = if highlight { "stat-card highlight" } else { "stat-card" };
        html! {
            div class=(class) {
                div class="stat-value" { (value) }
                div class="stat-label" { (self.t(label_key)) }
            }
        }
    }

    fn no_violations(&self) -> Markup {
        html! {
            div class="no-violations" {
                h2 { "\u{2705} " (self.t("report.no_violations.title")) }
                p { (self.t("report.no_violations.message")) }
            }
        }
    }

    fn section(&self, kind: ViolationKind, violations: &Violations) -> Markup {
        let cards: Vec<Markup> = match kind {
            ViolationKind::FuelTheft => violations
                .fuel_theft
                .iter()
                .map(|r| self.fuel_theft_card(r))
                .collect(),
            ViolationKind::FuelAnomalies => violations
                .fuel_anomalies
                .iter()
                .map(|r| self.fuel_anomaly_card(r))
                .collect(),
            ViolationKind::GhostJobs => violations
                .ghost_jobs
                .iter()
                .map(|r| self.ghost_job_card(r))
                .collect(),
            ViolationKind::IdleAbuse => violations
                .idle_abuse
                .iter()
                .map(|r| self.idle_abuse_card(r))
                .collect(),
            ViolationKind::AfterHoursDriving => violations
                .after_hours_driving
                .iter()
                .map(|r| self.after_hours_card(r))
                .collect(),
        };

        let title = self.t(&format!("report.section.{}", kind.key()));

        html! {
            section class=(format!("violation-section {}", kind.css_class())) {
                h2 class="section-title" {
                    (kind.icon()) " " (title) " (" (violations.len_of(kind)) ")"
                }
                @for card in cards {
                    (card)
                }
            }
        }
    }

    fn footer(&self, ctx: &ReportContext) -> Markup {
        html! {
            footer class="footer" {
                p { (self.t("report.footer.generated")) " " (or_na(ctx.generated_date.as_deref())) }
                p { (self.t("report.footer.note")) }
            }
        }
    }

    // ==========================================
    // 违规卡片
    // ==========================================

    fn card_header(&self, title: &str, when: &str) -> Markup {
        html! {
            div class="violation-header" {
                span class="vehicle-id" { (title) }
                span class="timestamp" { (when) }
            }
        }
    }

    fn detail_line(&self, label_key: &str, value: &str) -> Markup {
        html! {
            p { strong { (self.t(label_key)) ":" } " " (value) }
        }
    }

    fn description(&self, description: Option<&str>) -> Markup {
        html! {
            @if let Some(text) = description {
                p class="description" { (text) }
            }
        }
    }

    fn fuel_theft_card(&self, r: &FuelTheftRecord) -> Markup {
        html! {
            div class="violation-card" {
                (self.card_header(or_na(r.vehicle_id.as_deref()), &format_timestamp(r.timestamp.as_ref())))
                div class="violation-details" {
                    (self.detail_line("report.field.location", or_na(r.location.as_deref())))
                    @if let Some(gallons) = r.gallons {
                        (self.detail_line("report.field.gallons", &format_gallons(gallons)))
                    }
                    @if let Some(amount) = r.amount {
                        (self.detail_line("report.field.cost", &format_currency(amount, &self.options.currency_symbol)))
                    }
                    @if let Some(method) = &r.detection_method {
                        (self.detail_line("report.field.detection_method", &prettify_token(method)))
                    }
                    @if let Some(confidence) = r.confidence {
                        (self.detail_line("report.field.confidence", &format_percent(confidence)))
                    }
                    (self.description(r.description.as_deref()))
                }
            }
        }
    }

    fn fuel_anomaly_card(&self, r: &FuelAnomalyRecord) -> Markup {
        html! {
            div class="violation-card" {
                (self.card_header(or_na(r.vehicle_id.as_deref()), &format_timestamp(r.timestamp.as_ref())))
                div class="violation-details" {
                    @if let Some(anomaly) = &r.anomaly_type {
                        (self.detail_line("report.field.anomaly_type", &prettify_token(anomaly)))
                    }
                    (self.detail_line("report.field.location", or_na(r.location.as_deref())))
                    @if let Some(gallons) = r.gallons {
                        (self.detail_line("report.field.gallons", &format_gallons(gallons)))
                    }
                    @if let (Some(raw), Some(level)) = (&r.severity, r.severity_level()) {
                        p {
                            strong { (self.t("report.field.severity")) ":" } " "
                            span class=(format!("severity-badge {}", level.css_class())) { (prettify_token(raw)) }
                        }
                    }
                    (self.description(r.description.as_deref()))
                }
            }
        }
    }

    fn ghost_job_card(&self, r: &GhostJobRecord) -> Markup {
        html! {
            div class="violation-card" {
                (self.card_header(or_na(r.job_id.as_deref()), &format_timestamp(r.scheduled_time.as_ref())))
                div class="violation-details" {
                    (self.detail_line("report.field.driver", or_na(r.driver_id.as_deref())))
                    (self.detail_line("report.field.address", or_na(r.address.as_deref())))
                    (self.description(r.description.as_deref()))
                }
            }
        }
    }

    fn idle_abuse_card(&self, r: &IdleAbuseRecord) -> Markup {
        let minutes_unit = self.t("report.unit.minutes");
        html! {
            div class="violation-card" {
                (self.card_header(or_na(r.vehicle_id.as_deref()), &format_timestamp(r.start_time.as_ref())))
                div class="violation-details" {
                    (self.detail_line("report.field.start", &format_timestamp(r.start_time.as_ref())))
                    (self.detail_line("report.field.end", &format_timestamp(r.end_time.as_ref())))
                    @if let Some(minutes) = r.duration_minutes {
                        (self.detail_line("report.field.duration", &format!("{} {}", format_minutes(minutes), minutes_unit)))
                    }
                    (self.description(r.description.as_deref()))
                }
            }
        }
    }

    fn after_hours_card(&self, r: &AfterHoursRecord) -> Markup {
        html! {
            div class="violation-card" {
                (self.card_header(or_na(r.vehicle_id.as_deref()), &format_date(r.date.as_ref())))
                div class="violation-details" {
                    (self.detail_line("report.field.first_violation", &format_time(r.first_violation_time.as_ref())))
                    (self.detail_line("report.field.last_violation", &format_time(r.last_violation_time.as_ref())))
                    (self.detail_line("report.field.total_records", &r.total_records.unwrap_or(0).to_string()))
                    (self.description(r.description.as_deref()))
                }
            }
        }
    }
}
