use envparse_core::{PatternRegistry, RecordKind};

/// Strategy for listing the dialects the pattern registry knows.
///
/// For each dialect it prints the identifier to pass to `--dialect`, the
/// device command whose output it recognizes, and the record kinds it can
/// produce.
#[derive(Debug, Clone, Copy)]
pub struct DialectsStrategy;

impl super::CommandStrategy for DialectsStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let registry = PatternRegistry::global();

        for dialect in registry.dialects() {
            let Some(patterns) = registry.get(dialect) else {
                continue;
            };
            let kinds: Vec<&str> = RecordKind::PRECEDENCE
                .into_iter()
                .filter(|kind| patterns.supports(*kind))
                .map(|kind| kind.as_str())
                .collect();
            println!(
                "{:<6}  {:<17}  {}",
                dialect.as_str(),
                dialect.command(),
                kinds.join(", ")
            );
        }

        Ok(())
    }
}
