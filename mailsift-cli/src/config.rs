use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Where folder mode writes its results
    pub folder: String,
    pub filter_suspicious: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: "output_csv".to_string(),
            filter_suspicious: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[output]
# Folder used when processing a whole directory
folder = "output_csv"
# Write suspicious addresses to a separate <name>_suspicious file
filter_suspicious = true

[logging]
# Overridden by RUST_LOG when set
level = "info"
"#;

impl AppConfig {
    /// Load `path`, or the per-user config file when no path is given. The
    /// per-user file is created with defaults on first use.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let config_path = get_config_path();
                ensure_default_config(&config_path)?;
                config_path
            }
        };

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()).format(FileFormat::Toml))
            .build()?;

        let config: AppConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

fn ensure_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("mailsift").join("config.toml")
    } else {
        PathBuf::from("mailsift.toml")
    }
}
