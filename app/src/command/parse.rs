use envparse_config::{Config, OutputFormat};
use envparse_core::{Dialect, EnvironmentItem, PatternRegistry, Summary, parse_with};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone)]
pub struct ParseInput {
    /// Captured command output files; stdin when empty
    pub files: Vec<PathBuf>,
    /// Dialect override, falls back to `defaults.dialect`
    pub dialect: Option<String>,
    /// Output format override, falls back to `defaults.format`
    pub format: Option<OutputFormat>,
    /// Append per-kind counts
    pub summary: bool,
}

/// Records parsed from one input source.
#[derive(Debug, Serialize)]
struct Report {
    source: String,
    dialect: Dialect,
    items: Vec<EnvironmentItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
}

/// Strategy for parsing captured `show environment` output.
///
/// The dialect is resolved before any input is read. Several files are parsed
/// in parallel against the shared pattern registry and reported in argument
/// order.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;

        let dialect: Dialect = match input.dialect {
            Some(d) => normalize_dialect(&d).parse()?,
            None => config.defaults.dialect.ok_or_else(|| {
                anyhow::anyhow!("No dialect given. Pass --dialect or set defaults.dialect in config.")
            })?,
        };
        let patterns = PatternRegistry::global().lookup(dialect.as_str())?;
        let format = input.format.unwrap_or(config.defaults.format);

        let sources = if input.files.is_empty() {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            vec![("-".to_string(), text)]
        } else {
            input
                .files
                .iter()
                .map(|path| {
                    std::fs::read_to_string(path)
                        .map(|text| (path.display().to_string(), text))
                        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))
                })
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        let reports: Vec<Report> = sources
            .into_par_iter()
            .map(|(source, text)| {
                let items = parse_with(patterns, &text);
                info!("Parsed {} records from {source}", items.len());
                Report {
                    summary: input.summary.then(|| Summary::from_items(&items)),
                    source,
                    dialect,
                    items,
                }
            })
            .collect();

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            OutputFormat::Table => {
                let show_source = reports.len() > 1;
                for report in &reports {
                    print!("{}", render_report(report, show_source));
                }
            }
        }

        Ok(())
    }
}

/// Command-line dialect names are accepted in any case and with stray
/// whitespace; the core identifiers are exact.
fn normalize_dialect(name: &str) -> String {
    name.trim().to_uppercase()
}

fn render_report(report: &Report, show_source: bool) -> String {
    let mut out = String::new();
    if show_source {
        out.push_str(&format!("== {} ({}) ==\n", report.source, report.dialect));
    }
    out.push_str(&render_table(&report.items));
    if let Some(summary) = &report.summary {
        out.push_str(&format!(
            "{} records: {} temperature, {} power status, {} power usage, {} unhealthy\n",
            summary.total(),
            summary.temperatures,
            summary.power_statuses,
            summary.power_usages,
            summary.unhealthy
        ));
    }
    out
}

fn render_table(items: &[EnvironmentItem]) -> String {
    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!(
        "{:<name_width$}  {:<12}  {:>10}  {:<5}  STATUS\n",
        "NAME", "KIND", "VALUE", "OK"
    );
    for item in items {
        let value = item.value().map_or_else(|| "-".to_string(), |v| v.to_string());
        let ok = item.ok().map_or("-", |ok| if ok { "yes" } else { "no" });
        let status = item.status().unwrap_or("-");
        out.push_str(&format!(
            "{:<name_width$}  {:<12}  {:>10}  {:<5}  {}\n",
            item.name,
            item.kind().as_str(),
            value,
            ok,
            status
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_each_record() {
        let items = vec![
            EnvironmentItem::temperature("P0 Inlet", 29.0),
            EnvironmentItem::power_status("P1 Iout", false, "failed"),
        ];

        let table = render_table(&items);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("P0 Inlet"));
        assert!(lines[1].contains("temperature"));
        assert!(lines[1].contains("29"));
        assert!(lines[2].contains("power_status"));
        assert!(lines[2].contains("no"));
        assert!(lines[2].ends_with("failed"));
    }

    #[test]
    fn report_shows_source_and_summary() {
        let items = vec![EnvironmentItem::power_usage("1 N9K-C93180YC-EX", 248.0, true)];
        let report = Report {
            source: "leaf1.txt".to_string(),
            dialect: Dialect::NxOs,
            summary: Some(Summary::from_items(&items)),
            items,
        };

        let out = render_report(&report, true);
        assert!(out.starts_with("== leaf1.txt (NXOS) =="));
        assert!(out.contains("1 records: 0 temperature, 0 power status, 1 power usage, 0 unhealthy"));
    }

    #[test]
    fn report_without_source_or_summary_is_just_the_table() {
        let items = vec![EnvironmentItem::temperature("1 air inlet", 23.0)];
        let report = Report {
            source: "-".to_string(),
            dialect: Dialect::Ios,
            summary: None,
            items,
        };

        let out = render_report(&report, false);
        assert_eq!(out, render_table(&report.items));
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn cli_dialect_names_are_normalized() {
        assert_eq!(normalize_dialect("nxos").parse::<Dialect>().ok(), Some(Dialect::NxOs));
        assert_eq!(normalize_dialect(" IOS ").parse::<Dialect>().ok(), Some(Dialect::Ios));
        assert_eq!(normalize_dialect("IosXe\n").parse::<Dialect>().ok(), Some(Dialect::IosXe));
        assert!(normalize_dialect("junos").parse::<Dialect>().is_err());
    }

    #[test]
    fn empty_table_has_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 1);
    }
}
