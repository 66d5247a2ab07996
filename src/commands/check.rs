use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use crate::cli::{CheckArgs, OutputFormat};
use license_header_auditor::config::{load_config, load_config_from, OUTPUT_FORMATS};
use license_header_auditor::output::{format_json_output, format_table_output};
use license_header_auditor::{Options, Policy};

pub fn handle_check(args: CheckArgs, quiet: bool, verbose: bool) -> Result<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));

    let config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config(&root)?,
    };

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some("json")) => OutputFormat::Json,
        (None, Some("table") | None) => OutputFormat::Table,
        (None, Some(other)) => anyhow::bail!(
            "Unknown format {:?} in configuration (expected one of: {})",
            other,
            OUTPUT_FORMATS.join(", ")
        ),
    };

    // CLI arguments override config values
    let mut policy = config.policy();
    if let Some(header) = args.header {
        policy.header = header;
    }
    if !args.include_suffixes.is_empty() {
        policy.include_suffixes = args.include_suffixes;
    }
    if !args.exclude_suffixes.is_empty() {
        policy.exclude_suffixes = args.exclude_suffixes;
    }
    if !args.skip_paths.is_empty() {
        policy.skip_paths = args.skip_paths;
    }
    debug!(?policy, root = %root.display(), "Running license header policy");

    let report = policy.compliance(&Options { root })?;

    if !report.is_valid() && !quiet {
        eprintln!("License header violations found: {} total", report.violation_count());
    }

    let output_content = match format {
        OutputFormat::Json => format_json_output(&report)?,
        OutputFormat::Table => format_table_output(&report, &policy, verbose),
    };

    match args.output {
        Some(path) => fs::write(&path, output_content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            if !quiet {
                print!("{}", output_content);
                if !output_content.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    if !report.is_valid() && !args.exit_zero && config.fail_on_violations.unwrap_or(true) {
        std::process::exit(1);
    }

    Ok(())
}
