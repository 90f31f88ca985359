//! Runtime configuration
//!
//! Loaded from an optional RON file. Every field has a default so a partial
//! file (or no file at all) is valid.
//!
//! ```ron
//! (
//!     interaction: (
//!         rest_position: Offset,
//!         highlight_color: 0xC0C0C0,
//!     ),
//!     camera: (rotate_speed: 0.8),
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::scene::Color;

/// Default config location, relative to the working directory (or the page on WASM)
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    /// Fetch failure reported by macroquad (WASM)
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    FileError(String),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::FileError(e) => write!(f, "File error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where a handle's rest position is recorded at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestPosition {
    /// Captured before the handle is moved to its offset, i.e. the origin
    #[default]
    Origin,
    /// The canonical offset along the handle's axis
    Offset,
}

/// Selection, handle and feedback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Distance of each handle from the cube along its axis; also the scale divisor
    pub handle_offset: f32,
    pub handle_radius: f32,
    pub color_duration_ms: f32,
    pub original_color: Color,
    pub highlight_color: Color,
    pub outline_color: Color,
    pub handle_colors: [Color; 3],
    pub rest_position: RestPosition,
    /// Restore orbit rotation when a handle drag ends instead of on deactivation
    pub restore_orbit_on_drag_end: bool,
    /// World-space tolerance for picking line segments
    pub line_pick_threshold: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            handle_offset: 1.5,
            handle_radius: 0.1,
            color_duration_ms: 500.0,
            original_color: Color::from_hex(0x808080),
            highlight_color: Color::from_hex(0xA0A0A0),
            outline_color: Color::from_hex(0x00FF00),
            handle_colors: [
                Color::from_hex(0xFF0000),
                Color::from_hex(0x00FF00),
                Color::from_hex(0x0000FF),
            ],
            rest_position: RestPosition::Origin,
            restore_orbit_on_drag_end: false,
            line_pick_threshold: 1.0,
        }
    }
}

/// Projection and orbit-control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Starting distance from the target
    pub distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
            rotate_speed: 0.5,
            zoom_speed: 1.0,
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 0.5,
            max_distance: 100.0,
        }
    }
}

/// Top-level config
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub interaction: InteractionConfig,
    pub camera: CameraConfig,
    pub background: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interaction: InteractionConfig::default(),
            camera: CameraConfig::default(),
            background: Color::BLACK,
        }
    }
}

fn positive(name: &str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{} must be a positive number (got {})", name, v)))
    }
}

impl AppConfig {
    /// Parse and validate RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let i = &self.interaction;
        positive("interaction.handle_offset", i.handle_offset)?;
        positive("interaction.handle_radius", i.handle_radius)?;
        positive("interaction.color_duration_ms", i.color_duration_ms)?;
        positive("interaction.line_pick_threshold", i.line_pick_threshold)?;

        let c = &self.camera;
        positive("camera.fov_degrees", c.fov_degrees)?;
        positive("camera.near", c.near)?;
        positive("camera.distance", c.distance)?;
        positive("camera.min_distance", c.min_distance)?;
        if c.fov_degrees >= 180.0 {
            return Err(ConfigError::ValidationError(format!(
                "camera.fov_degrees must be below 180 (got {})", c.fov_degrees
            )));
        }
        if !(c.far > c.near) {
            return Err(ConfigError::ValidationError(format!(
                "camera.far ({}) must exceed camera.near ({})", c.far, c.near
            )));
        }
        if !(c.max_distance >= c.min_distance) {
            return Err(ConfigError::ValidationError(format!(
                "camera.max_distance ({}) must be at least camera.min_distance ({})",
                c.max_distance, c.min_distance
            )));
        }
        if !(c.rotate_speed >= 0.0 && c.rotate_speed.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "camera.rotate_speed must be non-negative (got {})", c.rotate_speed
            )));
        }
        if !(0.0..=1.0).contains(&c.damping_factor) {
            return Err(ConfigError::ValidationError(format!(
                "camera.damping_factor must be within [0, 1] (got {})", c.damping_factor
            )));
        }
        Ok(())
    }

    /// Read a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load the config for this platform
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::read_file(path)
        }
        #[cfg(target_arch = "wasm32")]
        {
            let text = macroquad::file::load_string(path)
                .await
                .map_err(|e| ConfigError::FileError(e.to_string()))?;
            Self::from_ron_str(&text)
        }
    }

    /// Load, falling back to defaults (and saying why) on any failure
    pub async fn load_or_default(path: &str) -> Self {
        match Self::load(path).await {
            Ok(config) => {
                println!("Loaded config from {}", path);
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("No config at {}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                eprintln!("Failed to load config from {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_ron_str("()").unwrap();
        assert_eq!(config.interaction.handle_offset, 1.5);
        assert_eq!(config.interaction.color_duration_ms, 500.0);
        assert_eq!(config.interaction.rest_position, RestPosition::Origin);
        assert!(!config.interaction.restore_orbit_on_drag_end);
        assert_eq!(config.camera.rotate_speed, 0.5);
        assert_eq!(config.camera.damping_factor, 0.05);
        assert_eq!(config.interaction.highlight_color.to_hex(), 0xA0A0A0);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_ron_str(
            "(interaction: (rest_position: Offset, highlight_color: 0xC0C0C0), camera: (rotate_speed: 0.8))",
        )
        .unwrap();
        assert_eq!(config.interaction.rest_position, RestPosition::Offset);
        assert_eq!(config.interaction.highlight_color.to_hex(), 0xC0C0C0);
        assert_eq!(config.interaction.original_color.to_hex(), 0x808080);
        assert_eq!(config.camera.rotate_speed, 0.8);
        assert_eq!(config.camera.fov_degrees, 75.0);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = AppConfig::from_ron_str(include_str!("../assets/config.ron")).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.interaction.handle_offset, defaults.interaction.handle_offset);
        assert_eq!(config.interaction.handle_colors, defaults.interaction.handle_colors);
        assert_eq!(config.camera.max_distance, defaults.camera.max_distance);
        assert_eq!(config.background, defaults.background);
    }

    #[test]
    fn test_parse_error() {
        let result = AppConfig::from_ron_str("(interaction: (handle_offset: \"far\"))");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_rejects_zero_offset() {
        let result = AppConfig::from_ron_str("(interaction: (handle_offset: 0.0))");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_damping_out_of_range() {
        let result = AppConfig::from_ron_str("(camera: (damping_factor: 1.5))");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(interaction: (color_duration_ms: 250.0))").unwrap();
        let config = AppConfig::read_file(file.path()).unwrap();
        assert_eq!(config.interaction.color_duration_ms, 250.0);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::read_file(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
