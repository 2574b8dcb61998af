//! Run configuration loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable config files. Every
//! field is optional; missing ones take the built-in defaults, which reproduce
//! the shipped animation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::output::SHADE_RAMP;
use crate::rasterizer::RenderSettings;

/// Presentation settings, outside the rendering core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pause between frames in the live previews
    pub frame_delay_ms: u64,
    /// Array name prefix; the frame index is appended
    pub table_name: String,
    /// Byte entries per line in the table
    pub table_row_len: usize,
    /// Preview characters, lightest first
    pub shade_ramp: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            frame_delay_ms: 16,
            table_name: "ANIM_FRAME".to_string(),
            table_row_len: 128,
            shade_ramp: SHADE_RAMP.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderSettings,
    pub output: OutputSettings,
}

/// Why a config file could not be used
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    Io(std::io::Error),
    /// The file is not valid RON for [`Config`]
    Syntax(ron::error::SpannedError),
    /// The config could not be encoded as RON
    Encode(ron::Error),
    /// Parsed fine but the values cannot be rendered
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Syntax(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Encode(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot access config file: {}", e),
            ConfigError::Syntax(e) => write!(f, "config is not valid RON at {}: {}", e.position, e.code),
            ConfigError::Encode(e) => write!(f, "cannot encode config as RON: {}", e),
            ConfigError::Invalid(msg) => write!(f, "config rejected: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Syntax(e) => Some(e),
            ConfigError::Encode(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl Config {
    /// Reject settings the renderer or the packer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.render;
        if r.width == 0 || r.width % 8 != 0 {
            return Err(ConfigError::Invalid(format!(
                "width must be a positive multiple of 8, got {}",
                r.width
            )));
        }
        if r.height == 0 {
            return Err(ConfigError::Invalid("height must be positive".to_string()));
        }
        if r.frame_count == 0 {
            return Err(ConfigError::Invalid("frame_count must be positive".to_string()));
        }
        for (name, step) in [("u_step", r.u_step), ("v_step", r.v_step)] {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, step)));
            }
        }
        if r.camera_distance.is_nan() || r.camera_distance <= 0.0 {
            return Err(ConfigError::Invalid("camera_distance must be positive".to_string()));
        }
        if self.output.shade_ramp.is_empty() {
            return Err(ConfigError::Invalid("shade_ramp must not be empty".to_string()));
        }
        if self.output.table_row_len == 0 {
            return Err(ConfigError::Invalid("table_row_len must be positive".to_string()));
        }
        Ok(())
    }
}

/// Load and validate a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load and validate a config from a RON string
pub fn load_config_from_str(s: &str) -> Result<Config, ConfigError> {
    let config: Config = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::SurfaceKind;

    #[test]
    fn test_empty_config_is_default() {
        let config = load_config_from_str("()").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config_from_str(
            "(render: (surface: Torus, frame_count: 8), output: (table_name: \"TORUS\"))",
        )
        .unwrap();
        assert_eq!(config.render.surface, SurfaceKind::Torus);
        assert_eq!(config.render.frame_count, 8);
        assert_eq!(config.render.width, 32);
        assert_eq!(config.output.table_name, "TORUS");
        assert_eq!(config.output.table_row_len, 128);
    }

    #[test]
    fn test_rejects_unpackable_width() {
        let err = load_config_from_str("(render: (width: 30))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().starts_with("config rejected: width must be"));
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = load_config_from_str("(render: (v_step: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = load_config_from_str("(render: (width: \"wide\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
        assert!(err.to_string().starts_with("config is not valid RON at 1:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_file_reports_io() {
        let err = load_config(std::env::temp_dir().join("surface-baker-no-such-config.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("cannot access config file:"));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("surface-baker-{}.ron", std::process::id()));
        let mut config = Config::default();
        config.render.surface = SurfaceKind::Torus;
        config.output.frame_delay_ms = 40;
        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
