use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::Path;
use tracing::debug;

use ico_to_svg_application::error::{AppError, AppResult};
use ico_to_svg_application::infrastructure_config::Config;

pub const LOCAL_CONFIG_FILE: &str = "ico-to-svg.toml";
pub const ENV_PREFIX: &str = "ICO_TO_SVG_";

/// Defaults, then `ico-to-svg.toml` in the working directory, then `extra`,
/// then `ICO_TO_SVG_*` environment variables.
pub fn load_config(extra: Option<&Path>) -> AppResult<Config> {
    load_config_from(Path::new(LOCAL_CONFIG_FILE), extra)
}

pub fn load_config_from(local: &Path, extra: Option<&Path>) -> AppResult<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if local.exists() {
        debug!("Merging {}", local.display());
        figment = figment.merge(Toml::file_exact(local));
    }

    if let Some(path) = extra {
        if !path.is_file() {
            return Err(AppError::ConfigError {
                message: format!("Config file not found: {}", path.display()),
            });
        }
        debug!("Merging {}", path.display());
        figment = figment.merge(Toml::file_exact(path));
    }

    let config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}
