//! Config subcommands handler

use anyhow::Result;

use slx::Config;

/// Show the effective configuration as TOML.
///
/// Values missing from the config file are shown with their defaults.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created, using defaults)", path.display());
    }
    Ok(())
}
