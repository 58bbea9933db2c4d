use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::fs;
use std::path::Path;
use tracing::info;

use pixels_desk_application::error::{AppError, AppResult};
use pixels_desk_application::infrastructure_config::Config;

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;

    let default_config = Config::default();
    let mut figment = Figment::from(Serialized::defaults(default_config));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    let config: Config = figment
        .merge(Env::prefixed("PIXELSDESK_").split("__"))
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template. Please configure your API token!");
    info!("IMPORTANT: .env contains sensitive data and is gitignored.");

    Ok(())
}
