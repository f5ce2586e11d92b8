use rrda_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Runs before logging is set up,
/// so failures surface through the returned error only.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
