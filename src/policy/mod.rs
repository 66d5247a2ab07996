pub mod config;
pub mod matcher;
pub mod checker;
pub mod report;

// Re-export main types
pub use config::{LicenseHeaderPolicy, SuffixFilter};
pub use matcher::{PathMatcher, PatternError};
pub use checker::{ComplianceReport, HeaderValidator};
pub use report::{Check, Options, Policy, Report, Violation};
