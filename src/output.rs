use serde::Serialize;
use crate::policy::{Check, LicenseHeaderPolicy, Report, Violation};

#[derive(Serialize)]
struct ReportView<'a> {
    valid: bool,
    checks: Vec<CheckView<'a>>,
}

#[derive(Serialize)]
struct CheckView<'a> {
    name: &'a str,
    message: String,
    errors: Vec<ViolationView<'a>>,
}

#[derive(Serialize)]
struct ViolationView<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    message: String,
}

pub fn format_json_output(report: &Report) -> serde_json::Result<String> {
    let view = ReportView {
        valid: report.is_valid(),
        checks: report.checks().iter().map(|check| check_view(check.as_ref())).collect(),
    };
    serde_json::to_string_pretty(&view)
}

fn check_view(check: &dyn Check) -> CheckView<'_> {
    CheckView {
        name: check.name(),
        message: check.message(),
        errors: check
            .errors()
            .iter()
            .map(|violation| ViolationView {
                violation,
                message: violation.to_string(),
            })
            .collect(),
    }
}

pub fn format_table_output(report: &Report, policy: &LicenseHeaderPolicy, verbose: bool) -> String {
    let mut output = String::new();

    if verbose {
        output.push_str(&format_policy(policy));
        output.push('\n');
    }

    for check in report.checks() {
        let icon = if check.is_valid() { "✅" } else { "❌" };
        output.push_str(&format!("{} {}: {}\n", icon, check.name(), check.message()));
        for violation in check.errors() {
            output.push_str(&format!("   - {}\n", violation));
        }
    }

    if report.checks().is_empty() {
        output.push_str("No checks were run.\n");
    }

    output
}

fn format_policy(policy: &LicenseHeaderPolicy) -> String {
    let mut output = String::new();

    output.push_str("📄 License header policy\n");
    output.push_str(&format!("   skip paths:       {}\n", join_or_none(&policy.skip_paths)));
    output.push_str(&format!("   include suffixes: {}\n", join_or_none(&policy.include_suffixes)));
    output.push_str(&format!("   exclude suffixes: {}\n", join_or_none(&policy.exclude_suffixes)));
    let first_line = policy.header.lines().next().unwrap_or("(not set)");
    output.push_str(&format!("   header:           {}\n", truncate(first_line, 60)));

    output
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}
