use super::Config;
use crate::error::Result;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "lettermatrix.toml";

/// Load configuration relative to the current directory
pub async fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    load_config_in(&cwd, explicit).await
}

/// Load configuration, looking for [`DEFAULT_CONFIG_FILE`] in `dir`
///
/// An explicit path must exist; the default file is optional. Environment
/// overrides are applied on top of whatever file was read.
pub async fn load_config_in(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => read_config_file(path).await?,
        None => {
            let default_path = dir.join(DEFAULT_CONFIG_FILE);
            if fs::try_exists(&default_path).await? {
                read_config_file(&default_path).await?
            } else {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Config::new()
            }
        }
    };

    config.merge_env_vars();
    Ok(config)
}

async fn read_config_file(path: &Path) -> Result<Config> {
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path).await?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
