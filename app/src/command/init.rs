use envparse_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/envparse/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - defaults.dialect: IOS, IOSXE or NXOS, used when --dialect is omitted");
        println!("   - defaults.format: json or table");
        println!("   - logging.level: tracing filter, overridden by RUST_LOG");
        println!();
        Ok(())
    }
}
