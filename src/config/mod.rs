use std::string::ToString;

use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::form::validate::Contains;
use rocket::serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// config properties for the upload store
#[derive(Deserialize, Clone)]
pub struct UploadConfig {
    /// directory every stored file lives under
    pub root: String,
    #[serde(rename = "maxsizebytes")]
    pub max_size_bytes: u64,
    /// extra roots probed by the read side, e.g. a mounted archive share
    #[serde(rename = "extrasearchroots")]
    pub extra_search_roots: Vec<String>,
    /// directory layout templates older deployments stored files under.
    /// Placeholders: {path}, {owner}, {file}
    #[serde(rename = "legacylayouts")]
    pub legacy_layouts: Vec<String>,
}

/// config properties for the background sweeps
#[derive(Deserialize, Clone)]
pub struct SweepConfig {
    #[serde(rename = "tempmaxageseconds")]
    pub temp_max_age_seconds: u64,
    #[serde(rename = "orphanminageseconds")]
    pub orphan_min_age_seconds: u64,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct TankServerConfig {
    pub database: DbConfig,
    pub upload: UploadConfig,
    pub sweep: SweepConfig,
}

/// Parses the config file located at ./TankServer.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> TankServerConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./TankServer.toml"))
        .build();
    // some errors are fine, such as not found
    if let Err(ConfigError::Foreign(e)) = builder {
        let message = e.to_string();
        if message.contains("not found") {
            log::warn!("No config file found. Continuing startup...");
            return TS_CONFIG_DEFAULT.clone();
        }
        panic!("Failed to parse config file. Exception is {e}");
        // basically everything else is unrecoverable, though
    } else if let Err(e) = builder {
        log::error!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
    let settings = builder.unwrap();
    settings
        .try_deserialize()
        .unwrap_or(TS_CONFIG_DEFAULT.clone())
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static TANK_SERVER_CONFIG: Lazy<TankServerConfig> = Lazy::new(parse_config);
static TS_CONFIG_DEFAULT: Lazy<TankServerConfig> = Lazy::new(|| TankServerConfig {
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    upload: UploadConfig {
        root: "./uploads".to_string(),
        max_size_bytes: 10 * 1024 * 1024,
        extra_search_roots: Vec::new(),
        legacy_layouts: vec![
            "tank_images_mobile/{path}/{file}".to_string(),
            "{path}/originals/{file}".to_string(),
            "{path}/thumbnails/{file}".to_string(),
        ],
    },
    sweep: SweepConfig {
        temp_max_age_seconds: 2 * 60 * 60,
        // a week-old floor keeps the sweep from racing an in-flight upload
        // whose row hasn't been committed yet
        orphan_min_age_seconds: 7 * 24 * 60 * 60,
    },
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_config_uses_conservative_limits() {
        let config = TS_CONFIG_DEFAULT.clone();
        assert_eq!(10 * 1024 * 1024, config.upload.max_size_bytes);
        assert_eq!(2 * 60 * 60, config.sweep.temp_max_age_seconds);
        assert_eq!(7 * 24 * 60 * 60, config.sweep.orphan_min_age_seconds);
    }
}
