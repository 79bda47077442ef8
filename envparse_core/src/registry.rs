//! Per-dialect line matchers.
//!
//! Every matcher exposes its fields as positional capture groups:
//!
//! | kind           | group 1 | group 2 | group 3      | group 4      |
//! |----------------|---------|---------|--------------|--------------|
//! | temperature    | label   | label   | degrees      |              |
//! | power status   | label   | label   | status word  |              |
//! | power usage    | label   | label   | usage value  | module state |

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::item::RecordKind;

static REGISTRY: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::builtin);

/// Compiled matchers for one dialect. A missing matcher means the dialect
/// never reports that record kind.
#[derive(Debug, Clone, Default)]
pub struct DialectPatterns {
    temperature: Option<Regex>,
    power_status: Option<Regex>,
    power_usage: Option<Regex>,
}

impl DialectPatterns {
    /// Compile a matcher triple from pattern strings.
    ///
    /// # Errors
    /// Returns an error if a pattern does not compile or has fewer capture
    /// groups than its record kind needs.
    pub fn new(
        temperature: Option<&str>,
        power_status: Option<&str>,
        power_usage: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            temperature: compile(RecordKind::Temperature, temperature)?,
            power_status: compile(RecordKind::PowerStatus, power_status)?,
            power_usage: compile(RecordKind::PowerUsage, power_usage)?,
        })
    }

    #[must_use]
    pub const fn matcher(&self, kind: RecordKind) -> Option<&Regex> {
        match kind {
            RecordKind::Temperature => self.temperature.as_ref(),
            RecordKind::PowerStatus => self.power_status.as_ref(),
            RecordKind::PowerUsage => self.power_usage.as_ref(),
        }
    }

    #[must_use]
    pub const fn supports(&self, kind: RecordKind) -> bool {
        self.matcher(kind).is_some()
    }

    /// Present matchers in classification precedence order.
    pub fn matchers(&self) -> impl Iterator<Item = (RecordKind, &Regex)> {
        RecordKind::PRECEDENCE
            .into_iter()
            .filter_map(|kind| self.matcher(kind).map(|re| (kind, re)))
    }
}

/// Number of capture groups a matcher of `kind` must define.
const fn required_groups(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Temperature | RecordKind::PowerStatus => 3,
        RecordKind::PowerUsage => 4,
    }
}

fn compile(kind: RecordKind, pattern: Option<&str>) -> Result<Option<Regex>> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };
    let re = Regex::new(pattern)?;
    // captures_len counts the implicit whole-match group
    let found = re.captures_len() - 1;
    let expected = required_groups(kind);
    if found < expected {
        return Err(Error::CaptureCount {
            kind,
            expected,
            found,
        });
    }
    Ok(Some(re))
}

/// Rewrite the `\w`, `\s` and `\d` shorthands as ASCII-only classes.
///
/// Device output columns are ASCII; a label with accented letters or a
/// non-breaking space separator is not a row the built-in tables recognize.
/// Applies to the built-in patterns only, which contain no escaped backslashes
/// and put any literal `-` first inside a bracket class.
fn ascii_classes(pattern: &str) -> String {
    pattern
        .replace(r"\w", "[0-9A-Za-z_]")
        .replace(r"\s", r"[\t\n\f\r ]")
        .replace(r"\d", "[0-9]")
}

fn builtin_patterns(
    temperature: Option<&str>,
    power_status: Option<&str>,
    power_usage: Option<&str>,
) -> Result<DialectPatterns> {
    let temperature = temperature.map(ascii_classes);
    let power_status = power_status.map(ascii_classes);
    let power_usage = power_usage.map(ascii_classes);
    DialectPatterns::new(
        temperature.as_deref(),
        power_status.as_deref(),
        power_usage.as_deref(),
    )
}

/// The closed table of supported dialects.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    entries: HashMap<Dialect, DialectPatterns>,
}

impl PatternRegistry {
    /// Shared registry holding the built-in dialects, compiled on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    #[expect(
        clippy::expect_used,
        reason = "Static patterns are fixed and covered by tests"
    )]
    fn builtin() -> Self {
        let mut registry = Self::default();

        registry.insert(
            Dialect::IosXe,
            builtin_patterns(
                Some(r"\s*(\w\w)\s*Temp: (\w+)\s+\w+\s+(\d+) Celsius"),
                Some(r"\s*(\w\w)\s*PEM (\w+)\s+(\w+)\s+\d*\s[\s\w]*"),
                None,
            )
            .expect("IOS-XE patterns are valid"),
        );
        registry.insert(
            Dialect::Ios,
            builtin_patterns(
                Some(r"^(\d+)\s+(air \w+(?: +\w+)?)\s+(\d+)C \(.*\)\s+\w+$"),
                Some(r"^(\w+)\s+.+\s+(AC) \w+\s+(\w+)\s+\w+\s+.+\s+.+$"),
                None,
            )
            .expect("IOS patterns are valid"),
        );
        registry.insert(
            Dialect::NxOs,
            builtin_patterns(
                Some(r"^(\d+)\s+(.+)\s+\d\d?\s+\d\d?\s+(\d\d?)\s+\w+\s*$"),
                Some(r"^(\d+)\s+.+\s+(AC)\s+.+\s+.+\s+(\w+)\s*$"),
                Some(
                    r"^(\d+)\s+([-\w]+)\s+\d+\.?\d+\s+\d+\.?\d+\s+(\d+\.\d+)\s+\d+\.?\d+\s+(\w+-?\w+)$",
                ),
            )
            .expect("NX-OS patterns are valid"),
        );

        debug!("Compiled patterns for {} dialects", registry.entries.len());
        registry
    }

    pub fn insert(&mut self, dialect: Dialect, patterns: DialectPatterns) {
        self.entries.insert(dialect, patterns);
    }

    #[must_use]
    pub fn get(&self, dialect: Dialect) -> Option<&DialectPatterns> {
        self.entries.get(&dialect)
    }

    /// Resolve a dialect identifier to its matchers.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedDialect`] when the identifier is unknown or
    /// has no entry in this registry.
    pub fn lookup(&self, dialect: &str) -> Result<&DialectPatterns> {
        let parsed: Dialect = dialect.parse()?;
        self.get(parsed)
            .ok_or_else(|| Error::UnsupportedDialect(dialect.to_string()))
    }

    /// Registered dialects in declaration order.
    #[must_use]
    pub fn dialects(&self) -> Vec<Dialect> {
        Dialect::ALL
            .into_iter()
            .filter(|d| self.entries.contains_key(d))
            .collect()
    }
}
