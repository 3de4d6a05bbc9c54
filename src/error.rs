//! Error types for the harness side of the crate.
//!
//! The geometry and render stages never fail; only window setup,
//! presentation and configuration checks produce errors.

use thiserror::Error;

/// A configuration value rejected before the first frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window size must be non-zero, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },

    #[error("target fps must be greater than zero")]
    ZeroFps,

    #[error("grid spacing must be greater than zero")]
    ZeroGridSpacing,

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("point radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("{name} shading range is empty or inverted: [{min}, {max}]")]
    InvalidShadeDomain {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    /// SDL reports failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        let err = ConfigError::EmptyWindow {
            width: 0,
            height: 500,
        };
        assert_eq!(err.to_string(), "window size must be non-zero, got 0x500");

        let err: Error = ConfigError::NegativeRadius(-2.0).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: point radius must not be negative, got -2"
        );
    }
}
