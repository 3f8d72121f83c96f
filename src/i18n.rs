// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 报告渲染显式传入 locale,不修改全局语言
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 支持的语言
pub const SUPPORTED_LOCALES: &[&str] = &["en", "zh-CN"];

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译报告标签（指定语言）
///
/// # 示例
/// ```no_run
/// use fleet_audit_report::i18n::t;
/// let title = t("report.title", "en");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}
