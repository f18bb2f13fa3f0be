use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use voxquad_quad::{QuadEncoding, ShadingMode};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: Render,
    #[serde(default)]
    pub runtime: Runtime,
    #[serde(default)]
    pub log: Log,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Render {
    #[serde(default)]
    pub shading: ShadingMode,
    #[serde(default)]
    pub encoding: QuadEncoding,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Runtime {
    /// 0 = rayon default.
    #[serde(default)]
    pub threads: usize,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Log {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

pub fn load_config_from_path(path: &Path) -> Result<Config, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&s)?;
    log::info!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Reads `path` when it exists, otherwise returns defaults.
pub fn load_or_default(path: &Path) -> Result<Config, Box<dyn Error>> {
    if path.exists() {
        load_config_from_path(path)
    } else {
        log::debug!("no config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}
