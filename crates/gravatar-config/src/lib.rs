use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use gravatar_core::{AvatarRequest, DEFAULT_ALT, DEFAULT_SIZE};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "gravatar";
const CONFIG_FILENAME: &str = "config.toml";

/// Defaults applied to every request built from this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarConfig {
    pub size: i32,
    pub default_image: String,
    pub prefer_https: bool,
    pub force_default: bool,
    pub alt: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            default_image: String::new(),
            prefer_https: true,
            force_default: false,
            alt: DEFAULT_ALT.to_string(),
        }
    }
}

impl AvatarConfig {
    pub fn request_for(&self, email: Option<&str>) -> AvatarRequest {
        AvatarRequest {
            email: email.map(str::to_string),
            size: self.size,
            default_image_url: self.default_image.clone(),
            prefer_https: self.prefer_https,
            force_default_image: self.force_default,
            alt: self.alt.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    size: Option<i32>,
    default_image: Option<String>,
    prefer_https: Option<bool>,
    force_default: Option<bool>,
    alt: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AvatarConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AvatarConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AvatarConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AvatarConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

pub fn parse_str(contents: &str, path: &Path) -> Result<AvatarConfig> {
    let parsed: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(merge_config(parsed))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AvatarConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_str(&contents, path)?;
    debug!(path = %path.display(), "config loaded");
    Ok(Some(config))
}

fn merge_config(parsed: ConfigFile) -> AvatarConfig {
    let mut config = AvatarConfig::default();

    if let Some(size) = parsed.size {
        config.size = size;
    }
    if let Some(default_image) = parsed.default_image {
        config.default_image = default_image;
    }
    if let Some(prefer_https) = parsed.prefer_https {
        config.prefer_https = prefer_https;
    }
    if let Some(force_default) = parsed.force_default {
        config.force_default = force_default;
    }
    if let Some(alt) = parsed.alt {
        config.alt = alt;
    }

    config
}
