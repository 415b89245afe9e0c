use ferrous_lookup_domain::{CliOverrides, LookupConfig};

/// Load the configuration and reject values the resolver cannot run with.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<LookupConfig> {
    let config = LookupConfig::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
