use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::config::LicenseHeaderPolicy;
use super::matcher::PathMatcher;
use super::report::{Check, Options, Policy, Report, Violation};

/// Findings of one header validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    violations: Vec<Violation>,
}

impl ComplianceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn count(&self) -> usize {
        self.violations.len()
    }

    pub fn summary(&self) -> String {
        if self.violations.is_empty() {
            "All files have a valid license header".to_string()
        } else {
            format!("Found {} files without license header", self.violations.len())
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl Check for ComplianceReport {
    fn name(&self) -> &str {
        "File Header"
    }

    fn message(&self) -> String {
        self.summary()
    }

    fn errors(&self) -> &[Violation] {
        &self.violations
    }
}

/// Walks a tree and verifies that every selected file starts with the header
pub struct HeaderValidator<'a> {
    policy: &'a LicenseHeaderPolicy,
}

impl<'a> HeaderValidator<'a> {
    pub fn new(policy: &'a LicenseHeaderPolicy) -> Self {
        Self { policy }
    }

    /// Validate every file under `root`. Paths in the report are relative to `root`.
    pub fn validate(&self, root: &Path) -> ComplianceReport {
        let mut report = ComplianceReport::new();

        if self.policy.header.is_empty() {
            report.add_violation(Violation::HeaderNotDefined);
            return report;
        }

        let (matcher, pattern_errors) = PathMatcher::new(&self.policy.skip_paths);
        for error in pattern_errors {
            warn!(line = error.line, pattern = %error.pattern, "Ignoring invalid skip pattern: {}", error.reason);
            report.add_violation(Violation::InvalidPattern {
                line: error.line,
                pattern: error.pattern,
                reason: error.reason,
            });
        }

        let filter = self.policy.suffix_filter();
        let header = self.policy.header.as_bytes();
        let mut checked = 0usize;

        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Stopping walk of {}: {}", root.display(), err);
                    report.add_violation(Violation::Walk {
                        reason: err.to_string(),
                    });
                    break;
                }
            };

            let relative = match entry.path().strip_prefix(root) {
                Ok(relative) if !relative.as_os_str().is_empty() => relative,
                _ => entry.path(),
            };
            let file_type = entry.file_type();

            if entry.depth() > 0 && matcher.matches(relative, file_type.is_dir()) {
                if file_type.is_dir() {
                    debug!("Skipping directory {}", relative.display());
                    walker.skip_current_dir();
                } else {
                    debug!("Skipping file {}", relative.display());
                }
                continue;
            }

            if !file_type.is_file() || !filter.is_applicable(entry.file_name()) {
                continue;
            }

            checked += 1;
            match fs::read(entry.path()) {
                Ok(contents) if contents.starts_with(header) => {}
                Ok(_) => report.add_violation(Violation::MissingHeader {
                    path: relative.to_path_buf(),
                }),
                Err(err) => {
                    warn!("Failed to read {}: {}", relative.display(), err);
                    report.add_violation(Violation::Unreadable {
                        path: relative.to_path_buf(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(checked, violations = report.count(), "License header check finished");
        report
    }
}

impl LicenseHeaderPolicy {
    /// Check the header of every selected file under `root`
    pub fn validate_license_header(&self, root: &Path) -> ComplianceReport {
        HeaderValidator::new(self).validate(root)
    }
}

impl Policy for LicenseHeaderPolicy {
    fn compliance(&self, options: &Options) -> anyhow::Result<Report> {
        let mut report = Report::new();
        report.add_check(self.validate_license_header(&options.root));
        Ok(report)
    }
}
