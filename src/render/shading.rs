//! Depth-to-gray shading.
//!
//! Depth is mapped linearly from a fixed input range onto [0, 255]. Depths
//! outside the range clamp to the nearest bound, so nearer (larger z) reads
//! brighter and nothing extrapolates past the channel limits.

use crate::colors::Rgb;

/// Input z range mapped onto the full intensity range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeDomain {
    /// Depth that maps to intensity 0.
    pub min: f64,
    /// Depth that maps to intensity 255.
    pub max: f64,
}

impl ShadeDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps `z` to an intensity in [0, 255].
    ///
    /// A NaN depth shades as 0.
    pub fn intensity(&self, z: f64) -> u8 {
        let z = z.max(self.min).min(self.max);
        let t = (z - self.min) / (self.max - self.min);
        // Float to int casts saturate, NaN becomes 0.
        (t * 255.0).round() as u8
    }

    /// Gray color for `z`, same intensity on all channels.
    pub fn shade(&self, z: f64) -> Rgb {
        Rgb::gray(self.intensity(z))
    }
}

/// Shading ranges for the two depth-sorted passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingConfig {
    /// Applied to the mean z of each face.
    pub faces: ShadeDomain,
    /// Applied to the z of each vertex overlay point.
    pub vertices: ShadeDomain,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            faces: ShadeDomain::new(-20.0, 20.0),
            vertices: ShadeDomain::new(-10.0, 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        let domain = ShadeDomain::new(-20.0, 20.0);
        assert_eq!(domain.intensity(-20.0), 0);
        assert_eq!(domain.intensity(20.0), 255);
        assert_eq!(domain.intensity(0.0), 128); // 127.5 rounds up
        assert_eq!(domain.intensity(10.0), 191);
    }

    #[test]
    fn out_of_range_clamps() {
        let domain = ShadeDomain::new(-20.0, 20.0);
        assert_eq!(domain.intensity(100.0), 255);
        assert_eq!(domain.intensity(-100.0), 0);
        assert_eq!(domain.intensity(f64::INFINITY), 255);
        assert_eq!(domain.intensity(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn nan_depth_is_black() {
        let domain = ShadeDomain::new(-10.0, 10.0);
        assert_eq!(domain.shade(f64::NAN), Rgb::gray(0));
    }

    #[test]
    fn shade_is_gray() {
        let color = ShadingConfig::default().vertices.shade(5.0);
        assert_eq!(color.r, color.g);
        assert_eq!(color.g, color.b);
        assert_eq!(color.r, 191);
    }
}
