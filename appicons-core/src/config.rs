use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    #[serde(alias = "imagemagick_binary")]
    pub imagemagick_binary: PathBuf,
    #[serde(alias = "rsvg_binary")]
    pub rsvg_binary: PathBuf,
    /// resolution ImageMagick reads the SVG at before resizing
    pub density: u32,

    /// path of the configuration file, if the configuration was loaded from a file
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            imagemagick_binary: PathBuf::from("convert"),
            rsvg_binary: PathBuf::from("rsvg-convert"),
            density: 300,
            source: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(#[source] toml::de::Error),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] toml::de::Error),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("density must be positive")]
    InvalidDensity,
}

impl AppConfig {
    pub fn parse(s: &str) -> Result<AppConfig, ConfigLoadError> {
        let config: AppConfig = toml::from_str(s).map_err(ConfigLoadError::InvalidConfigString)?;
        config.validate()
    }

    pub fn parse_file(p: &Path) -> Result<AppConfig, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let mut config: AppConfig = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e))?;
        config.source = Some(p.to_owned());
        config.validate()
    }

    /// Loads the explicitly given file, or the project's config file if it exists, or the
    /// defaults.
    pub fn load(explicit: Option<&Path>, layout: &Layout) -> Result<AppConfig, ConfigLoadError> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => {
                let path = layout.default_config_file();
                if path.is_file() {
                    Self::parse_file(&path)
                } else {
                    tracing::debug!("no config file at {}, using defaults", path.display());
                    Ok(AppConfig::default())
                }
            }
        }
    }

    fn validate(self) -> Result<AppConfig, ConfigLoadError> {
        if self.density == 0 {
            return Err(ConfigLoadError::InvalidDensity);
        }
        Ok(self)
    }
}
