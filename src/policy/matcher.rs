use glob::{MatchOptions, Pattern};
use std::path::{Component, Path};
use thiserror::Error;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A skip pattern that could not be compiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pattern {pattern:?} on line {line}: {reason}")]
pub struct PatternError {
    /// 1-based line number across all skip entries
    pub line: usize,
    pub pattern: String,
    pub reason: String,
}

/// One component of an ignore pattern
#[derive(Debug, Clone)]
enum Segment {
    /// `**`: zero or more directories
    AnyDirs,
    Glob(Pattern),
}

/// A single compiled ignore line
#[derive(Debug, Clone)]
struct IgnoreRule {
    segments: Vec<Segment>,
    negated: bool,
    dir_only: bool,
    /// Unanchored rules match the base name at any depth
    anchored: bool,
}

impl IgnoreRule {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = trim_trailing_spaces(line.trim_end_matches(['\r', '\n']));
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (negated, body) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };

        let dir_only = body.ends_with('/');
        let body = body.trim_end_matches('/');
        let anchored = body.contains('/');
        let body = body.trim_start_matches('/');
        if body.is_empty() {
            return Ok(None);
        }

        let segments = body
            .split('/')
            .filter(|part| !part.is_empty())
            .map(compile_segment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            segments,
            negated,
            dir_only,
            anchored,
        }))
    }

    fn matches(&self, components: &[&str], is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            match_segments(&self.segments, components)
        } else {
            components
                .last()
                .is_some_and(|name| match_segments(&self.segments, &[*name]))
        }
    }
}

/// Strip unescaped trailing spaces, keeping a backslash-escaped one
fn trim_trailing_spaces(line: &str) -> &str {
    let trimmed = line.trim_end_matches(' ');
    if trimmed.len() < line.len() && trimmed.ends_with('\\') {
        &line[..trimmed.len() + 1]
    } else {
        trimmed
    }
}

fn compile_segment(part: &str) -> Result<Segment, String> {
    if part == "**" {
        return Ok(Segment::AnyDirs);
    }

    // glob has no escape character: rewrite `\x` as a bracketed literal.
    // A `**` inside a component behaves like a single `*`.
    let mut source = String::with_capacity(part.len());
    let mut chars = part.chars();
    let mut after_star = false;
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => source.push_str(&Pattern::escape(&escaped.to_string())),
                None => return Err("trailing backslash".to_string()),
            }
            after_star = false;
        } else if c == '*' {
            if !after_star {
                source.push(c);
            }
            after_star = true;
        } else {
            source.push(c);
            after_star = false;
        }
    }

    Pattern::new(&source)
        .map(Segment::Glob)
        .map_err(|e| e.msg.to_string())
}

fn match_segments(segments: &[Segment], components: &[&str]) -> bool {
    match segments.split_first() {
        None => components.is_empty(),
        // a trailing `**` matches everything inside, not the directory itself
        Some((Segment::AnyDirs, [])) => !components.is_empty(),
        Some((Segment::AnyDirs, rest)) => {
            (0..=components.len()).any(|skip| match_segments(rest, &components[skip..]))
        }
        Some((Segment::Glob(pattern), rest)) => match components.split_first() {
            Some((first, remaining)) => {
                pattern.matches_with(first, MATCH_OPTIONS) && match_segments(rest, remaining)
            }
            None => false,
        },
    }
}

/// Decides whether paths relative to the walk root are excluded by
/// gitignore-style skip patterns.
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    rules: Vec<IgnoreRule>,
}

impl PathMatcher {
    /// Compile skip entries. Each entry may hold several lines.
    ///
    /// Lines that fail to compile are returned as errors and never match;
    /// the remaining lines still apply.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> (Self, Vec<PatternError>) {
        let mut rules = Vec::new();
        let mut errors = Vec::new();

        let lines = entries.iter().flat_map(|entry| entry.as_ref().lines());
        for (index, line) in lines.enumerate() {
            match IgnoreRule::parse(line) {
                Ok(Some(rule)) => rules.push(rule),
                Ok(None) => {}
                Err(reason) => errors.push(PatternError {
                    line: index + 1,
                    pattern: line.to_string(),
                    reason,
                }),
            }
        }

        (Self { rules }, errors)
    }

    /// Whether `path` (relative to the root) is excluded.
    ///
    /// A path inside an excluded directory is excluded as well.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let owned: Vec<String> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let components: Vec<&str> = owned.iter().map(String::as_str).collect();
        if components.is_empty() {
            return false;
        }

        (1..components.len()).any(|depth| self.evaluate(&components[..depth], true))
            || self.evaluate(&components, is_dir)
    }

    /// Last matching rule wins
    fn evaluate(&self, components: &[&str], is_dir: bool) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(components, is_dir))
            .is_some_and(|rule| !rule.negated)
    }
}
