use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A single non-compliance finding recorded by a check
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("Header is not defined")]
    HeaderNotDefined,

    #[error("File {} does not contain a license header", path.display())]
    MissingHeader { path: PathBuf },

    #[error("Failed to open {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Invalid skip pattern {pattern:?} (line {line}): {reason}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        reason: String,
    },

    #[error("Failed to walk directory: {reason}")]
    Walk { reason: String },
}

/// Something a policy verifies, with its outcome
pub trait Check {
    /// Short, stable name of the check
    fn name(&self) -> &str;

    /// Human readable outcome
    fn message(&self) -> String;

    /// Every violation found, in discovery order
    fn errors(&self) -> &[Violation];

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Options handed to a policy by the runner
#[derive(Debug, Clone)]
pub struct Options {
    /// Root of the tree being checked
    pub root: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Outcome of running one policy: the checks it performed
#[derive(Default)]
pub struct Report {
    checks: Vec<Box<dyn Check>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// True when no check reported a violation
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|check| check.is_valid())
    }

    pub fn violation_count(&self) -> usize {
        self.checks.iter().map(|check| check.errors().len()).sum()
    }
}

/// A policy that can be evaluated against a tree
pub trait Policy {
    /// Run every check of the policy.
    ///
    /// Violations are report data; `Err` is reserved for conditions that make
    /// running the policy meaningless.
    fn compliance(&self, options: &Options) -> anyhow::Result<Report>;
}
