//! Application settings loaded from JSON.
//!
//! Every struct uses `#[serde(default)]`, so a file only needs the fields it
//! overrides and an empty object yields the default fly camera scene.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{FlyCamera, Projection, TargetCamera};
use crate::math::{MathError, Vector3};
use crate::traits::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    #[default]
    Fly,
    Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub kind: CameraKind,
    pub position: Vector3,
    /// Fly camera only
    pub world_up: Vector3,
    /// Fly camera only, degrees
    pub yaw: f64,
    /// Fly camera only, degrees
    pub pitch: f64,
    /// Target camera only
    pub target: Vector3,
    /// The aspect ratio is replaced by the window's
    pub projection: Projection,
    /// `[min, max]` in degrees; the camera's own default when absent
    pub pitch_limits: Option<[f64; 2]>,
    /// Target camera only
    pub distance_limits: Option<[f64; 2]>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            kind: CameraKind::Fly,
            position: Vector3::new(0.0, 0.0, 5.0),
            world_up: Vector3::Y,
            yaw: -90.0,
            pitch: 0.0,
            target: Vector3::ZERO,
            projection: Projection::default(),
            pitch_limits: None,
            distance_limits: None,
        }
    }
}

/// Speeds and thresholds of the interactive camera controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Units per millisecond
    pub move_speed: f64,
    /// Degrees per update while the cursor is in an edge band
    pub direction_speed: f64,
    /// Width of the screen edge bands in NDC units
    pub edge_band: f64,
    /// Minimum milliseconds between camera updates
    pub update_interval: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_speed: 0.005,
            direction_speed: 0.5,
            edge_band: 0.1,
            update_interval: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl WindowConfig {
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub camera: CameraConfig,
    pub controls: Controls,
    pub window: WindowConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Build the configured camera with the window's aspect ratio
    pub fn build_camera(&self) -> Result<Box<dyn Camera>, MathError> {
        let config = &self.camera;
        let projection = Projection {
            aspect: self.window.aspect(),
            ..config.projection
        };

        let mut camera: Box<dyn Camera> = match config.kind {
            CameraKind::Fly => {
                let mut camera =
                    FlyCamera::new(config.position, config.world_up, config.yaw, config.pitch)?;
                if let Some([min, max]) = config.pitch_limits {
                    camera.set_pitch_limits(min, max)?;
                }
                Box::new(camera)
            }
            CameraKind::Target => {
                let mut camera = TargetCamera::new(config.position, config.target)?;
                if let Some([min, max]) = config.pitch_limits {
                    camera.set_pitch_limits(min, max)?;
                }
                if let Some([min, max]) = config.distance_limits {
                    camera.set_distance_limits(min, max)?;
                }
                Box::new(camera)
            }
        };
        camera.setup_projection(projection)?;
        Ok(camera)
    }
}
