use super::helpers::{stderr, stdout, TestProject, GO_HEADER};

#[test]
fn test_check_reports_missing_header() {
    let project = TestProject::new();
    project.write_go_tree();
    project.write_go_config("");

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("Found 1 files without license header"));
    assert!(stdout.contains("File b.go does not contain a license header"));
    assert!(!stdout.contains("c.go"));
    assert!(stderr(&output).contains("License header violations found: 1 total"));
}

#[test]
fn test_check_passes_on_compliant_tree() {
    let project = TestProject::new();
    project.write_file("a.go", "// Copyright\npackage a\n");
    project.write_file("foo_test.go", "package a\n");
    project.write_go_config("");

    let output = project.run_auditor(&["check"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("All files have a valid license header"));
}

#[test]
fn test_exit_zero_and_config_switch() {
    let project = TestProject::new();
    project.write_go_tree();
    project.write_go_config("");

    let output = project.run_auditor(&["check", "--exit-zero"]);
    assert!(output.status.success());

    project.write_go_config("fail_on_violations = false");
    let output = project.run_auditor(&["check"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("b.go"));
}

#[test]
fn test_missing_header_configuration_is_a_violation() {
    let project = TestProject::new();
    project.write_file("a.go", "package a\n");

    let output = project.run_auditor(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Header is not defined"));
}

#[test]
fn test_cli_flags_without_config_file() {
    let project = TestProject::new();
    project.write_go_tree();

    let output = project.run_auditor(&[
        "check",
        "--header",
        GO_HEADER,
        "--include-suffix",
        ".go",
        "--skip-path",
        "vendor/",
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["valid"], false);
    let errors = json["checks"][0]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["kind"], "missing_header");
    assert_eq!(errors[0]["path"], "b.go");
}

#[test]
fn test_check_explicit_path_and_output_file() {
    let project = TestProject::new();
    project.write_file("repo/src/lib.go", "package lib\n");
    project.write_file(
        "repo/.license-header.toml",
        "[license]\ninclude_suffixes = [\".go\"]\nheader = \"// Copyright\"\n",
    );

    let output = project.run_auditor(&["check", "repo", "--output", "report.txt", "--exit-zero"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let report = std::fs::read_to_string(project.path("report.txt")).unwrap();
    assert!(report.contains("src/lib.go"));
}

#[test]
fn test_quiet_suppresses_output() {
    let project = TestProject::new();
    project.write_go_tree();
    project.write_go_config("");

    let output = project.run_auditor(&["--quiet", "check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(!stderr(&output).contains("violations found"));
}

#[test]
fn test_init_then_check() {
    let project = TestProject::new();
    project.write_file("src/lib.rs", "// SPDX-License-Identifier: MIT OR Apache-2.0\npub fn f() {}\n");
    project.write_file("src/main.rs", "fn main() {}\n");
    project.write_file("target/debug/build.rs", "fn main() {}\n");

    let init_output = project.run_auditor(&["init", "rust"]);
    assert!(init_output.status.success());
    assert!(project.root().join(".license-header.toml").exists());

    let output = project.run_auditor(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("src/main.rs"));
    assert!(!stdout.contains("src/lib.rs"));
    assert!(!stdout.contains("build.rs"));
}

#[test]
fn test_config_show_and_validate() {
    let project = TestProject::new();
    project.write_go_config("format = \"json\"");

    let show = project.run_auditor(&["config", "--show"]);
    assert!(show.status.success());
    assert!(stdout(&show).contains("\"include_suffixes\""));

    let validate = project.run_auditor(&["config", "--validate"]);
    assert!(validate.status.success());
    assert!(stdout(&validate).contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_missing_header() {
    let project = TestProject::new();
    project.write_file(".license-header.toml", "[license]\ninclude_suffixes = [\".go\"]\n");

    let output = project.run_auditor(&["config", "--validate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("license header is not defined"));
}

#[test]
fn test_config_validate_rejects_invalid_pattern() {
    let project = TestProject::new();
    project.write_file(
        ".license-header.toml",
        "[license]\nskip_paths = [\"[unclosed\", \"**.go\"]\nheader = \"// Copyright\"\n",
    );

    let output = project.run_auditor(&["config", "--validate"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("invalid pattern \"[unclosed\" on line 1"));
    assert!(!stderr.contains("**.go"));
    assert!(!stdout(&output).contains("Configuration is valid"));
}

#[test]
fn test_unknown_config_format_is_rejected() {
    let project = TestProject::new();
    project.write_go_tree();
    project.write_go_config("format = \"yaml\"");

    let output = project.run_auditor(&["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown format \"yaml\""));

    let output = project.run_auditor(&["check", "--format", "json", "--exit-zero"]);
    assert!(output.status.success());

    let validate = project.run_auditor(&["config", "--validate"]);
    assert_eq!(validate.status.code(), Some(1));
    assert!(stderr(&validate).contains("unknown format \"yaml\""));
}

#[test]
fn test_log_output_has_no_color_codes_when_redirected() {
    let project = TestProject::new();
    project.write_file(
        ".license-header.toml",
        "[license]\nskip_paths = [\"[unclosed\"]\ninclude_suffixes = [\".go\"]\nheader = \"// Copyright\"\n",
    );

    let output = project.run_auditor(&["check", "--exit-zero"]);
    let stderr = stderr(&output);
    assert!(stderr.contains("Ignoring invalid skip pattern"));
    assert!(!stderr.contains('\u{1b}'));
}
