// ==========================================
// 车队审计报告系统 - 内联样式表
// ==========================================
// 报告为自包含 HTML,不引用任何外部资源
// 打印时汇总网格收敛为 4 列,卡片不跨页
// ==========================================

pub const REPORT_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    background: #f5f7fa;
}
.container { max-width: 1000px; margin: 0 auto; padding: 20px; background: #fff; }
.header {
    text-align: center;
    padding: 30px 20px;
    background: linear-gradient(135deg, #1e3a5f 0%, #2c5282 100%);
    color: #fff;
    border-radius: 8px;
    margin-bottom: 30px;
}
.header h1 { font-size: 2.2em; margin-bottom: 8px; }
.header .company-name { font-size: 1.3em; font-weight: 600; }
.header .date-range { opacity: 0.9; margin-top: 6px; }
.summary { margin-bottom: 30px; }
.summary h2, .section-title {
    color: #1e3a5f;
    border-bottom: 2px solid #e2e8f0;
    padding-bottom: 8px;
    margin-bottom: 16px;
}
.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 16px;
}
.stat-card {
    background: #f8fafc;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 18px;
    text-align: center;
}
.stat-card.highlight { border-color: #e53e3e; background: #fff5f5; }
.stat-value { font-size: 2em; font-weight: 700; color: #1e3a5f; }
.stat-card.highlight .stat-value { color: #c53030; }
.stat-label { font-size: 0.9em; color: #718096; text-transform: uppercase; letter-spacing: 0.5px; }
.violation-section { margin-bottom: 30px; }
.violation-card {
    border: 1px solid #e2e8f0;
    border-left: 4px solid #e53e3e;
    border-radius: 6px;
    padding: 14px 18px;
    margin-bottom: 12px;
    background: #fff;
}
.fuel-anomalies .violation-card { border-left-color: #dd6b20; }
.ghost-jobs .violation-card { border-left-color: #805ad5; }
.idle-abuse .violation-card { border-left-color: #d69e2e; }
.after-hours-driving .violation-card { border-left-color: #3182ce; }
.violation-header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    margin-bottom: 8px;
}
.vehicle-id { font-weight: 700; font-size: 1.1em; color: #2d3748; }
.timestamp { color: #718096; font-size: 0.9em; }
.violation-details p { margin: 2px 0; }
.violation-details .description { margin-top: 8px; color: #4a5568; font-style: italic; }
.severity-badge {
    display: inline-block;
    padding: 1px 8px;
    border-radius: 10px;
    font-size: 0.8em;
    font-weight: 700;
    color: #fff;
    background: #a0aec0;
}
.severity-badge.severity-high { background: #c53030; }
.severity-badge.severity-medium { background: #dd6b20; }
.severity-badge.severity-low { background: #38a169; }
.no-violations {
    text-align: center;
    padding: 40px 20px;
    background: #f0fff4;
    border: 1px solid #9ae6b4;
    border-radius: 8px;
    color: #276749;
    margin-bottom: 30px;
}
.no-violations h2 { margin-bottom: 10px; }
.footer {
    text-align: center;
    color: #a0aec0;
    font-size: 0.85em;
    border-top: 1px solid #e2e8f0;
    padding-top: 16px;
    margin-top: 30px;
}
@media print {
    body { background: #fff; }
    .container { max-width: none; padding: 0; }
    .header { background: #1e3a5f; -webkit-print-color-adjust: exact; print-color-adjust: exact; }
    .stats-grid { grid-template-columns: repeat(4, 1fr); }
    .violation-card { page-break-inside: avoid; break-inside: avoid; }
    .violation-section { page-break-before: auto; }
}
"#;
