use serde::Deserialize;

use crate::utils::FilmcatResult;

impl Config {

    pub fn init() -> FilmcatResult<Self> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("FILMCAT_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            .set_default("logs.level", "info")?
            // Add in config toml, if there is one
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of FILMCAT)
            .add_source(config::Environment::with_prefix("FILMCAT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logs: LogsConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    /// tracing level name ("trace", "debug", "info", ...). Events go to stderr.
    pub level: String,
}
