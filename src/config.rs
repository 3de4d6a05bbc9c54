//! Harness configuration.
//!
//! Defaults reproduce the classic demo: a 500x500 window titled "Pseudo-3D"
//! at 60 FPS showing a 50 unit cube at (100, 100, 0) that spins one degree
//! per frame around X.
//!
//! ```ignore
//! let config = Config {
//!     mode: RenderMode::Wireframe,
//!     ..Config::default()
//! };
//! config.validate()?;
//! ```

use crate::error::ConfigError;
use crate::math::vec3::Vec3;
use crate::render::{RenderMode, ShadeDomain, ShadingConfig};

pub const WINDOW_TITLE: &str = "Pseudo-3D";
pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 500;
pub const FPS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u64,

    pub position: Vec3,
    pub scale: Vec3,
    pub point_radius: f64,

    /// Degrees added per frame while a rotation key is held.
    pub rotation_step: f64,
    /// Degrees added per frame on each axis while auto-spin is on.
    pub auto_spin: Vec3,
    pub auto_spin_enabled: bool,

    pub mode: RenderMode,
    pub shading: ShadingConfig,

    /// Grid spacing in pixels when `draw_grid` is on.
    pub grid_spacing: i32,
    pub draw_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            position: Vec3::new(100.0, 100.0, 0.0),
            scale: Vec3::splat(50.0),
            point_radius: 3.0,
            rotation_step: 2.0,
            auto_spin: Vec3::new(1.0, 0.0, 0.0),
            auto_spin_enabled: true,
            mode: RenderMode::default(),
            shading: ShadingConfig::default(),
            grid_spacing: 50,
            draw_grid: false,
        }
    }
}

impl Config {
    /// Target frame time in milliseconds.
    pub fn frame_target_time(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    /// Checks every field the harness depends on.
    ///
    /// The core accepts any numbers; this is the only place values are
    /// rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.grid_spacing <= 0 {
            return Err(ConfigError::ZeroGridSpacing);
        }

        check_finite_vec("position", self.position)?;
        check_finite_vec("scale", self.scale)?;
        check_finite_vec("auto_spin", self.auto_spin)?;
        check_finite("point_radius", self.point_radius)?;
        check_finite("rotation_step", self.rotation_step)?;

        if self.point_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.point_radius));
        }

        check_domain("face", self.shading.faces)?;
        check_domain("vertex", self.shading.vertices)?;
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn check_finite_vec(name: &'static str, v: Vec3) -> Result<(), ConfigError> {
    if v.is_finite() {
        return Ok(());
    }
    // Report the first offending component.
    [v.x, v.y, v.z]
        .into_iter()
        .try_for_each(|value| check_finite(name, value))
}

fn check_domain(name: &'static str, domain: ShadeDomain) -> Result<(), ConfigError> {
    // Also rejects NaN bounds.
    if domain.min < domain.max {
        Ok(())
    } else {
        Err(ConfigError::InvalidShadeDomain {
            name,
            min: domain.min,
            max: domain.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (500, 500));
        assert_eq!(config.title, "Pseudo-3D");
        assert_relative_eq!(config.frame_target_time(), 1000.0 / 60.0);
    }

    #[test]
    fn rejects_empty_window() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyWindow {
                width: 500,
                height: 0
            })
        );
    }

    #[test]
    fn rejects_zero_fps_and_grid() {
        let config = Config {
            fps: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFps));

        let config = Config {
            grid_spacing: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGridSpacing));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let config = Config {
            scale: Vec3::new(1.0, f64::INFINITY, 1.0),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "scale", .. })
        ));

        let config = Config {
            rotation_step: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "rotation_step",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_radius() {
        let config = Config {
            point_radius: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeRadius(-1.0)));
    }

    #[test]
    fn rejects_inverted_shading_domain() {
        let mut config = Config::default();
        config.shading.vertices = ShadeDomain::new(5.0, 5.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidShadeDomain {
                name: "vertex",
                min: 5.0,
                max: 5.0
            })
        );
    }

    #[test]
    fn zero_scale_is_accepted() {
        // Degenerate geometry is allowed; the cube just collapses.
        let config = Config {
            scale: Vec3::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
