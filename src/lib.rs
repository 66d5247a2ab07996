pub mod config;
pub mod init;
pub mod output;
pub mod policy;

// Re-export main types for easy access
pub use policy::{
    Check, ComplianceReport, HeaderValidator, LicenseHeaderPolicy, Options, PathMatcher, Policy,
    Report, SuffixFilter, Violation,
};
