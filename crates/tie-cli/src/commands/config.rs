use anyhow::Result;
use tie_infrastructure::TieConfig;

pub fn show(config: &TieConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
