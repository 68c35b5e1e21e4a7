use crate::cli::ConfigArgs;
use crate::error::Result;
use farescrape_config::Settings;

/// Prints the resolved settings as TOML on stdout.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    settings.validate()?;
    print!("{}", settings.to_toml()?);
    Ok(())
}
