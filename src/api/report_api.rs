// ==========================================
// 车队审计报告系统 - 报告 API
// ==========================================
// 职责: 组合配置、上下文加载与报告生成,供 CLI 调用
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::context::{sample_context, ContextLoader};
use crate::domain::report_context::ReportContext;
use crate::i18n;
use crate::report::{ReportGenerator, ReportRequest};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

// ==========================================
// RenderRequest - 单次渲染的覆写参数
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// 覆写配置中的语言
    pub locale: Option<String>,
    pub derive_summary: bool,
}

impl RenderRequest {
    fn to_report_request(&self) -> ReportRequest {
        ReportRequest {
            company_name: non_blank(self.company_name.as_deref()),
            start_date: non_blank(self.start_date.as_deref()),
            end_date: non_blank(self.end_date.as_deref()),
            derive_summary: self.derive_summary,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ==========================================
// ReportApi
// ==========================================
pub struct ReportApi {
    config_manager: ConfigManager,
}

impl ReportApi {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    fn generator_for(&self, request: &RenderRequest) -> ApiResult<ReportGenerator> {
        let mut config = self.config_manager.to_report_config()?;

        if let Some(locale) = non_blank(request.locale.as_deref()) {
            if !i18n::is_supported(&locale) {
                return Err(ApiError::InvalidInput(format!(
                    "不支持的语言: {}（支持: {}）",
                    locale,
                    i18n::SUPPORTED_LOCALES.join(", ")
                )));
            }
            config.locale = locale;
        }

        Ok(ReportGenerator::new(config))
    }

    /// 渲染 JSON 文本形式的数据上下文
    pub fn render_json(&self, raw: &str, request: &RenderRequest) -> ApiResult<String> {
        self.render_json_at(raw, request, Local::now().naive_local())
    }

    pub fn render_json_at(
        &self,
        raw: &str,
        request: &RenderRequest,
        now: NaiveDateTime,
    ) -> ApiResult<String> {
        let ctx = ContextLoader::from_json_str(raw)?;
        self.render_context_at(ctx, request, now)
    }

    /// 渲染 JSON 文件形式的数据上下文
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn render_file(&self, path: &Path, request: &RenderRequest) -> ApiResult<String> {
        let ctx = ContextLoader::from_file(path)?;
        self.render_context_at(ctx, request, Local::now().naive_local())
    }

    /// 渲染已加载的上下文
    pub fn render_context_at(
        &self,
        ctx: ReportContext,
        request: &RenderRequest,
        now: NaiveDateTime,
    ) -> ApiResult<String> {
        let generator = self.generator_for(request)?;
        let ctx = generator.complete_context_at(ctx, &request.to_report_request(), now);
        Ok(generator.generate_html_report(&ctx))
    }

    /// 读取数据上下文文件,渲染并写入报告文件
    ///
    /// # 返回
    /// - Ok(PathBuf): 报告文件路径
    #[instrument(skip_all, fields(input = %input.display()))]
    pub fn generate_report_file(
        &self,
        input: &Path,
        request: &RenderRequest,
        output: Option<&Path>,
    ) -> ApiResult<PathBuf> {
        let ctx = ContextLoader::from_file(input)?;
        self.save_context(ctx, request, output)
    }

    /// 生成演示报告
    pub fn generate_sample_report(&self, output: Option<&Path>) -> ApiResult<PathBuf> {
        info!("生成演示报告");
        self.save_context(sample_context(), &RenderRequest::default(), output)
    }

    fn save_context(
        &self,
        ctx: ReportContext,
        request: &RenderRequest,
        output: Option<&Path>,
    ) -> ApiResult<PathBuf> {
        let now = Local::now().naive_local();
        let generator = self.generator_for(request)?;
        let ctx = generator.complete_context_at(ctx, &request.to_report_request(), now);
        let path = generator.save_html_report_at(&ctx, output, now)?;
        info!(
            path = %path.display(),
            violations = ctx.violations.total(),
            "报告生成完成"
        );
        Ok(path)
    }
}
