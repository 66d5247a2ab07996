use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// License header policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LicenseHeaderPolicy {
    /// gitignore-style patterns for parts of the tree that are never scanned (e.g. .git/)
    #[serde(default, alias = "skipPaths")]
    pub skip_paths: Vec<String>,
    /// File name suffixes the header check applies to
    #[serde(default, alias = "includeSuffixes")]
    pub include_suffixes: Vec<String>,
    /// File name suffixes that are never checked, even when included
    #[serde(default, alias = "excludeSuffixes")]
    pub exclude_suffixes: Vec<String>,
    /// Exact text every checked file must start with
    #[serde(default)]
    pub header: String,
}

impl LicenseHeaderPolicy {
    pub fn suffix_filter(&self) -> SuffixFilter<'_> {
        SuffixFilter {
            include: &self.include_suffixes,
            exclude: &self.exclude_suffixes,
        }
    }
}

/// Selects files by literal, case-sensitive name suffix. Exclusion wins.
#[derive(Debug, Clone, Copy)]
pub struct SuffixFilter<'a> {
    include: &'a [String],
    exclude: &'a [String],
}

impl<'a> SuffixFilter<'a> {
    pub fn new(include: &'a [String], exclude: &'a [String]) -> Self {
        Self { include, exclude }
    }

    /// Whether a file with this base name should be checked
    pub fn is_applicable(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        let ends_with_any =
            |suffixes: &[String]| suffixes.iter().any(|suffix| name.ends_with(suffix.as_bytes()));

        if ends_with_any(self.exclude) {
            return false;
        }
        ends_with_any(self.include)
    }
}
