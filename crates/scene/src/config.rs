//! Demo configuration, loadable from YAML.
//!
//! Every field has a default; a file only needs the keys it changes.

use crate::demo::DemoKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// First-person camera tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance per movement key press.
    pub move_speed: f32,
    /// Degrees per pan key press.
    pub pan_degrees: f32,
    pub fov_degrees: f32,
    /// Drag rotation is `drag_degrees / surface height` degrees per pixel.
    pub drag_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            pan_degrees: 10.0,
            fov_degrees: 90.0,
            drag_degrees: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub demo: DemoKind,
    pub width: u32,
    pub height: u32,
    pub camera: CameraConfig,
    /// Seed for the showcase's random placements.
    pub seed: u64,
    /// Showcase without orbit controls and with three fixed shapes.
    pub basic_showcase: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: DemoKind::World,
            width: 800,
            height: 800,
            camera: CameraConfig::default(),
            seed: 42,
            basic_showcase: false,
        }
    }
}

impl DemoConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), demo = %config.demo, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees {} must be within (0, 180)",
                cam.fov_degrees
            )));
        }
        if cam.move_speed < 0.0 {
            return Err(ConfigError::Invalid("move_speed must not be negative".into()));
        }
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
