// ==========================================
// 车队审计报告系统 - 报告生成器
// ==========================================
// 职责: 补齐上下文默认值 -> 渲染 -> 落盘
// 默认值:
// - 公司名: 配置 company_name
// - 日期范围: 截止 now,向前 lookback_days 天
// - 生成时间: now
// ==========================================

use crate::config::ReportConfig;
use crate::domain::report_context::{ReportContext, SummaryStats};
use crate::domain::violation::Violations;
use crate::report::html::HtmlRenderer;
use chrono::{Duration, Local, NaiveDateTime};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";
pub const GENERATED_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const REPORT_FILE_PREFIX: &str = "fleet_audit_report";

// ==========================================
// ReportRequest - 单次生成的覆写参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// 由违规序列重新推导汇总统计
    pub derive_summary: bool,
}

// ==========================================
// ReportGenerator
// ==========================================
pub struct ReportGenerator {
    config: ReportConfig,
    renderer: HtmlRenderer,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        let renderer = HtmlRenderer::new(config.render_options());
        Self { config, renderer }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 组装渲染上下文（当前本地时间）
    pub fn prepare_context(
        &self,
        violations: Violations,
        summary_stats: SummaryStats,
        request: &ReportRequest,
    ) -> ReportContext {
        self.prepare_context_at(violations, summary_stats, request, Local::now().naive_local())
    }

    /// 组装渲染上下文（指定时间）
    ///
    /// 起止日期任一缺失时,两者都按默认周期重新计算
    pub fn prepare_context_at(
        &self,
        violations: Violations,
        summary_stats: SummaryStats,
        request: &ReportRequest,
        now: NaiveDateTime,
    ) -> ReportContext {
        let summary_stats = if request.derive_summary {
            SummaryStats::from_violations(&violations)
        } else {
            summary_stats
        };

        let (start_date, end_date) = match (&request.start_date, &request.end_date) {
            (Some(start), Some(end)) => (start.clone(), end.clone()),
            _ => self.default_period(now),
        };

        ReportContext {
            company_name: Some(
                request
                    .company_name
                    .clone()
                    .unwrap_or_else(|| self.config.company_name.clone()),
            ),
            start_date: Some(start_date),
            end_date: Some(end_date),
            generated_date: Some(now.format(GENERATED_LABEL_FORMAT).to_string()),
            summary_stats,
            violations,
        }
    }

    /// 在已加载的上下文上应用覆写与默认值
    ///
    /// 上下文自带的标签优先于默认值,请求中的覆写优先于上下文
    pub fn complete_context_at(
        &self,
        ctx: ReportContext,
        request: &ReportRequest,
        now: NaiveDateTime,
    ) -> ReportContext {
        let merged = ReportRequest {
            company_name: request.company_name.clone().or(ctx.company_name),
            start_date: request.start_date.clone().or(ctx.start_date),
            end_date: request.end_date.clone().or(ctx.end_date),
            derive_summary: request.derive_summary,
        };

        let mut completed = self.prepare_context_at(ctx.violations, ctx.summary_stats, &merged, now);
        if let Some(generated) = ctx.generated_date {
            completed.generated_date = Some(generated);
        }
        completed
    }

    fn default_period(&self, now: NaiveDateTime) -> (String, String) {
        let end = now.date();
        let start = end - Duration::days(i64::from(self.config.lookback_days));
        (
            start.format(DATE_LABEL_FORMAT).to_string(),
            end.format(DATE_LABEL_FORMAT).to_string(),
        )
    }

    /// 渲染 HTML
    pub fn generate_html_report(&self, ctx: &ReportContext) -> String {
        let started = Instant::now();
        let html = self.renderer.render(ctx);
        debug!(
            bytes = html.len(),
            violations = ctx.violations.total(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "报告渲染完成"
        );
        html
    }

    /// 预览（仅渲染,不落盘）
    pub fn preview_report_html(&self, ctx: &ReportContext) -> String {
        self.generate_html_report(ctx)
    }

    /// 渲染并写入文件
    ///
    /// # 参数
    /// - output: 目标路径；为 None 时写入输出目录,文件名带时间戳
    pub fn save_html_report(&self, ctx: &ReportContext, output: Option<&Path>) -> io::Result<PathBuf> {
        self.save_html_report_at(ctx, output, Local::now().naive_local())
    }

    pub fn save_html_report_at(
        &self,
        ctx: &ReportContext,
        output: Option<&Path>,
        now: NaiveDateTime,
    ) -> io::Result<PathBuf> {
        let path = match output {
            Some(p) => p.to_path_buf(),
            None => self.config.output_dir.join(report_file_name(now)),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let html = self.generate_html_report(ctx);
        fs::write(&path, html)?;
        info!(path = %path.display(), "报告已保存");
        Ok(path)
    }
}

/// 报告文件名: fleet_audit_report_YYYYMMDD_HHMMSS.html
pub fn report_file_name(now: NaiveDateTime) -> String {
    format!("{}_{}.html", REPORT_FILE_PREFIX, now.format("%Y%m%d_%H%M%S"))
}
