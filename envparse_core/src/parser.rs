//! Line classifier for `show environment` output.

use regex::Captures;
use tracing::{debug, warn};

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::health::{is_status_healthy, is_usage_healthy};
use crate::item::{EnvironmentItem, RecordKind};
use crate::registry::{DialectPatterns, PatternRegistry};

/// Parse device output for the dialect identified by `dialect`.
///
/// The dialect is resolved before any line is looked at, so an unknown
/// identifier never yields a partial result.
///
/// # Errors
/// Returns [`Error::UnsupportedDialect`] if the dialect has no pattern table.
pub fn parse(dialect: &str, text: &str) -> Result<Vec<EnvironmentItem>> {
    let patterns = PatternRegistry::global().lookup(dialect)?;
    Ok(parse_with(patterns, text))
}

/// Parse device output for an already resolved dialect.
///
/// # Errors
/// Returns [`Error::UnsupportedDialect`] if the global registry lacks the dialect.
pub fn parse_dialect(dialect: Dialect, text: &str) -> Result<Vec<EnvironmentItem>> {
    let patterns = PatternRegistry::global()
        .get(dialect)
        .ok_or_else(|| Error::UnsupportedDialect(dialect.to_string()))?;
    Ok(parse_with(patterns, text))
}

/// Classify every line of `text` against `patterns`.
///
/// Lines matching no matcher are skipped. A matched line whose numeric field
/// does not parse is logged and skipped as well.
#[must_use]
pub fn parse_with(patterns: &DialectPatterns, text: &str) -> Vec<EnvironmentItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        match classify_line(patterns, line) {
            Ok(Some(item)) => {
                debug!(kind = %item.kind(), name = %item.name, "Classified line");
                items.push(item);
            }
            Ok(None) => {}
            Err(e) => warn!("Skipping line: {e}"),
        }
    }

    items
}

/// Classify a single line. The first matcher in precedence order wins.
///
/// # Errors
/// Returns [`Error::MalformedCapture`] when the winning matcher captured a
/// numeral that does not parse.
pub fn classify_line(patterns: &DialectPatterns, line: &str) -> Result<Option<EnvironmentItem>> {
    for (kind, re) in patterns.matchers() {
        if let Some(caps) = re.captures(line) {
            return build_item(kind, &caps, line).map(Some);
        }
    }
    Ok(None)
}

fn build_item(kind: RecordKind, caps: &Captures<'_>, line: &str) -> Result<EnvironmentItem> {
    let name = join_labels(group(caps, 1), group(caps, 2));

    let item = match kind {
        RecordKind::Temperature => {
            let value = parse_number("temperature", group(caps, 3), line)?;
            EnvironmentItem::temperature(name, value)
        }
        RecordKind::PowerStatus => {
            let status = group(caps, 3);
            EnvironmentItem::power_status(name, is_status_healthy(status), status)
        }
        RecordKind::PowerUsage => {
            let value = parse_number("power usage", group(caps, 3), line)?;
            EnvironmentItem::power_usage(name, value, is_usage_healthy(group(caps, 4)))
        }
    };

    Ok(item)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Join two labels with one space, collapsing runs of whitespace.
fn join_labels(first: &str, second: &str) -> String {
    first
        .split_whitespace()
        .chain(second.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_number(field: &'static str, raw: &str, line: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::MalformedCapture {
            field,
            value: raw.to_string(),
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Reading;

    #[test]
    fn join_labels_normalizes_whitespace() {
        assert_eq!(join_labels("1", "FRONT          "), "1 FRONT");
        assert_eq!(join_labels(" P0", "Inlet"), "P0 Inlet");
        assert_eq!(join_labels("1", "air   inlet"), "1 air inlet");
        assert_eq!(join_labels("", "CPU"), "CPU");
    }

    #[test]
    fn parse_number_reports_field_and_line() {
        let err = parse_number("temperature", "4x", "1 foo 4x").err();
        assert!(matches!(
            err,
            Some(Error::MalformedCapture { field: "temperature", ref value, .. }) if value == "4x"
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn first_matching_kind_consumes_line() {
        // both matchers accept the line; temperature is tried first
        let patterns = DialectPatterns::new(
            Some(r"^(\w+) (\w+) (\d+)$"),
            Some(r"^(\w+) (\w+) (\w+)$"),
            None,
        )
        .expect("valid patterns");

        let item = classify_line(&patterns, "PS1 inlet 40")
            .expect("numeral parses")
            .expect("line matches");
        assert_eq!(item.reading, Reading::Temperature { value: 40.0 });

        let item = classify_line(&patterns, "PS1 supply good")
            .expect("no numeral involved")
            .expect("line matches");
        assert_eq!(
            item.reading,
            Reading::PowerStatus {
                ok: true,
                status: "good".to_string()
            }
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn malformed_numeral_skips_only_that_line() {
        let patterns = DialectPatterns::new(Some(r"^(\w+) (\w+) (\S+)C$"), None, None)
            .expect("valid patterns");

        let items = parse_with(&patterns, "1 inlet 3x5C\n2 outlet 41C\n");
        assert_eq!(items, vec![EnvironmentItem::temperature("2 outlet", 41.0)]);

        assert!(matches!(
            classify_line(&patterns, "1 inlet 3x5C"),
            Err(Error::MalformedCapture { .. })
        ));
    }

    #[test]
    fn unmatched_line_is_none() {
        let patterns = DialectPatterns::default();
        assert!(matches!(classify_line(&patterns, "anything"), Ok(None)));
    }

    #[test]
    fn parse_dialect_uses_builtin_table() {
        let items = parse_dialect(Dialect::IosXe, " P0   Temp: Inlet   Normal   29 Celsius");
        assert!(matches!(items.as_deref(), Ok([item]) if item.name == "P0 Inlet"));
    }
}
