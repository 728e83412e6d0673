//! CLI entry point for iacguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `iacguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use iacguard_app::{
    CheckInput, ExplainOutput, SchemaKind, exit_code, format_rules, parse_report_json,
    render_annotations, render_markdown, render_text, resolve_settings, run_check, run_explain,
    runtime_error_report, schema_json, serialize_report, to_renderable,
};
use iacguard_settings::Overrides;
use iacguard_types::IacguardReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "iacguard",
    version,
    about = "Compliance policy checks for declared infrastructure resources"
)]
struct Cli {
    /// Path to iacguard config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = "iacguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (soc2|aws-security|all).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override pack enforcement (advisory|mandatory).
    #[arg(long, global = true)]
    enforcement: Option<String>,

    /// Override when to exit non-zero (never|mandatory|any).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Override maximum violations to emit.
    #[arg(long, global = true)]
    max_violations: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a resource snapshot and write artifacts.
    Check {
        /// Snapshot JSON file, or a directory of snapshot files.
        snapshot: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/iacguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/iacguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/iacguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/iacguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule id or control id with remediation guidance.
    Explain {
        /// The rule id (e.g., "s3-encryption-required") or control id (e.g., "CC6.1").
        identifier: String,
    },

    /// List the rules of the resolved pack in evaluation order.
    Rules,

    /// Print a JSON schema.
    Schema {
        #[arg(long, value_enum, default_value = "report")]
        kind: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaArg {
    Report,
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref snapshot,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, snapshot, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Rules => cmd_rules(&cli),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        enforcement: cli.enforcement.clone(),
        fail_on: cli.fail_on.clone(),
        max_violations: cli.max_violations,
    }
}

/// Missing config file is allowed (defaults apply); any other read error is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(
    cli: &Cli,
    snapshot: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let output = run_check(CheckInput {
            snapshot_path: snapshot,
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if write_markdown {
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }
        print!("{}", render_text(&renderable));

        Ok(exit_code(
            &output.report,
            output.resolved_config.effective.fail_on,
        ))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("iacguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &IacguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<IacguardReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found { explanation, rules } => {
            print!("{}", iacguard_app::format_explanation(&explanation, &rules));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_control_ids,
        } => {
            eprint!(
                "{}",
                iacguard_app::format_not_found(
                    &identifier,
                    available_rule_ids,
                    available_control_ids
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let resolved = resolve_settings(&cfg_text, overrides(cli))?;
    print!("{}", format_rules(&resolved.effective.pack));
    Ok(())
}

fn cmd_schema(kind: SchemaArg) -> anyhow::Result<()> {
    let kind = match kind {
        SchemaArg::Report => SchemaKind::Report,
        SchemaArg::Config => SchemaKind::Config,
    };
    println!("{}", schema_json(kind)?);
    Ok(())
}
