use roster::config::Config;
use roster::core::path::config_file;
use roster::core::RosterResult;

/// Print the effective config (file plus environment overrides) as YAML
pub fn show() -> RosterResult<()> {
    let config = Config::load()?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

/// Print the config file location
pub fn path() -> RosterResult<()> {
    println!("{}", config_file()?.display());
    Ok(())
}
