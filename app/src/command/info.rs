use envparse_config::Config;
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Values come from the config file when present and from built-in
/// defaults otherwise.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;
        info!("Loaded configuration");

        println!("=== envparse Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", config_path.display());
        }
        println!();

        println!("Defaults:");
        match config.defaults.dialect {
            Some(dialect) => println!("  Dialect: {dialect}"),
            None => println!("  Dialect: (not set)"),
        }
        println!("  Format: {}", config.defaults.format);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}
