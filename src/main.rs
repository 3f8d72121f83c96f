// ==========================================
// 车队审计报告系统 - 命令行入口
// ==========================================
// 子命令:
// - render: 数据上下文 JSON -> HTML 报告
// - sample: 生成演示报告
// ==========================================

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use fleet_audit_report::{logging, ConfigManager, RenderRequest, ReportApi};
use std::io::Write;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    logging::init_with_default(default_level);

    tracing::debug!("{} v{}", fleet_audit_report::APP_NAME, fleet_audit_report::VERSION);

    match matches.subcommand() {
        Some(("render", sub)) => run_render(sub),
        Some(("sample", sub)) => run_sample(sub),
        _ => unreachable!("subcommand_required(true) guarantees a subcommand"),
    }
}

fn cli() -> Command {
    Command::new("fleet-audit-report")
        .version(clap::crate_version!())
        .about("\u{1F69A} Fleet Audit Report - render fleet violation summaries as HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging (RUST_LOG takes precedence)"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a report from a data context JSON file")
                .arg(
                    Arg::new("context")
                        .help("Path to the data context JSON file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("company")
                        .long("company")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Company name shown in the report header"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Report period start label, e.g. 2024-01-15"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Report period end label, e.g. 2024-01-21"),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .value_parser(["en", "zh-CN"])
                        .help("Label language"),
                )
                .arg(
                    Arg::new("derive_summary")
                        .long("derive-summary")
                        .action(ArgAction::SetTrue)
                        .help("Recompute summary statistics from the violation records"),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("output")
                        .help("Write the HTML to stdout instead of a file"),
                ),
        )
        .subcommand(
            Command::new("sample")
                .about("Write a demonstration report built from sample data")
                .arg(output_arg())
                .arg(config_arg()),
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .help(
            "File path the HTML report will be written to. \
             Defaults to a timestamped file in the configured output directory.",
        )
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .help("Path to a JSON configuration file")
}

fn load_config(matches: &ArgMatches) -> Result<ConfigManager> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ConfigManager::new()),
    }
}

fn run_render(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let request = RenderRequest {
        company_name: matches.get_one::<String>("company").cloned(),
        start_date: matches.get_one::<String>("start").cloned(),
        end_date: matches.get_one::<String>("end").cloned(),
        locale: matches.get_one::<String>("locale").cloned(),
        derive_summary: matches.get_flag("derive_summary"),
    };

    let api = ReportApi::new(config);
    let input = matches
        .get_one::<PathBuf>("context")
        .context("missing context path")?;

    if matches.get_flag("stdout") {
        let html = api
            .render_file(input, &request)
            .with_context(|| format!("failed to render {}", input.display()))?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output = matches.get_one::<PathBuf>("output");
    let path = api
        .generate_report_file(input, &request, output.map(PathBuf::as_path))
        .with_context(|| format!("failed to render {}", input.display()))?;
    println!("Report written to {}", path.display());
    Ok(())
}

fn run_sample(matches: &ArgMatches) -> Result<()> {
    let api = ReportApi::new(load_config(matches)?);
    let output = matches.get_one::<PathBuf>("output");
    let path = api
        .generate_sample_report(output.map(PathBuf::as_path))
        .context("failed to generate sample report")?;
    println!("Sample report written to {}", path.display());
    Ok(())
}
