use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub merge: MergeConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct MergeConfig {
    /// Page size used when the caller does not pass one.
    pub page_size: usize,
    pub padding_mode: bool,
    /// Max concurrent source calls per async phase (unset = unbounded)
    pub max_inflight: Option<usize>,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("PAGE_MERGE_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `path` (extension optional); a missing file falls back to defaults.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("merge.page_size", 20_i64)?
        .set_default("merge.padding_mode", false)?
        .add_source(config::File::with_name(path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
