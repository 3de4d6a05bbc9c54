//! Cube geometry: vertex layout and axis rotation.
//!
//! A [`Cube`] is rebuilt from absolute angles every frame rather than being
//! rotated incrementally, so nothing here carries state between frames.
//!
//! # Vertex layout
//!
//! Indices 0-3 form the back slab and 4-7 the front slab. Inside each slab
//! the corner order is (-x,-y), (+x,-y), (-x,+y), (+x,+y).
//!
//! The front slab sits at `position.z / 2 + scale.z / 2`, which only mirrors
//! the back slab when `position.z == 0`. Shading and depth order depend on
//! that placement, so it is kept as is.
//!
//! # Rotation
//!
//! Each axis rotation converts a vertex's offset from the center into polar
//! form in the plane orthogonal to the axis, shifts the angle and converts
//! back. X rotation subtracts the angle while Y and Z add it.

use crate::colors::{self, Rgb};
use crate::math::vec3::Vec3;

pub const VERTEX_COUNT: usize = 8;

/// Rotation triple that leaves the base layout untouched (`90 - 90 = 0` on
/// every axis).
pub const NEUTRAL_ROTATION: Vec3 = Vec3::splat(90.0);

/// A cube corner with an optional display color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Option<Rgb>,
}

impl Vertex {
    pub const fn new(position: Vec3, color: Option<Rgb>) -> Self {
        Self { position, color }
    }
}

/// A cube with eight vertices rotated about its center.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    position: Vec3,
    rotation: Vec3, // degrees
    scale: Vec3,
    vertices: [Vertex; VERTEX_COUNT],
}

impl Cube {
    /// Builds the cube and orients it.
    ///
    /// Applies `rotate_x(90 - rotation.x)`, then `rotate_y(90 - rotation.y)`,
    /// then `rotate_z(90 - rotation.z)`. The offset makes `(0, 0, 0)` a
    /// quarter turn on every axis from the base layout, and the X, Y, Z order
    /// is fixed.
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let mut cube = Self::unrotated(position, scale);
        cube.rotation = rotation;
        cube.rotate_x(90.0 - rotation.x)
            .rotate_y(90.0 - rotation.y)
            .rotate_z(90.0 - rotation.z);
        cube
    }

    /// Builds the base layout without applying any rotation.
    pub fn unrotated(position: Vec3, scale: Vec3) -> Self {
        let half = scale / 2.0;
        let back_z = position.z - half.z;
        let front_z = position.z / 2.0 + half.z;

        let left = position.x - half.x;
        let right = position.x + half.x;
        let top = position.y - half.y;
        let bottom = position.y + half.y;

        let back = Some(colors::BACK_VERTEX);
        let front = Some(colors::FRONT_VERTEX);

        Self {
            position,
            rotation: NEUTRAL_ROTATION,
            scale,
            vertices: [
                // Back
                Vertex::new(Vec3::new(left, top, back_z), back),
                Vertex::new(Vec3::new(right, top, back_z), back),
                Vertex::new(Vec3::new(left, bottom, back_z), back),
                Vertex::new(Vec3::new(right, bottom, back_z), back),
                // Front
                Vertex::new(Vec3::new(left, top, front_z), front),
                Vertex::new(Vec3::new(right, top, front_z), front),
                Vertex::new(Vec3::new(left, bottom, front_z), front),
                Vertex::new(Vec3::new(right, bottom, front_z), front),
            ],
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The rotation the cube was built with, in degrees.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn vertices(&self) -> &[Vertex; VERTEX_COUNT] {
        &self.vertices
    }

    /// Rotates every vertex around the X axis, in the (y, z) plane.
    pub fn rotate_x(&mut self, degrees: f64) -> &mut Self {
        let center = self.position;
        let delta = -degrees.to_radians();
        for vertex in &mut self.vertices {
            let p = &mut vertex.position;
            (p.y, p.z) = rotate_in_plane((center.y, center.z), (p.y, p.z), delta);
        }
        self
    }

    /// Rotates every vertex around the Y axis, in the (x, z) plane.
    pub fn rotate_y(&mut self, degrees: f64) -> &mut Self {
        let center = self.position;
        let delta = degrees.to_radians();
        for vertex in &mut self.vertices {
            let p = &mut vertex.position;
            (p.x, p.z) = rotate_in_plane((center.x, center.z), (p.x, p.z), delta);
        }
        self
    }

    /// Rotates every vertex around the Z axis, in the (x, y) plane.
    pub fn rotate_z(&mut self, degrees: f64) -> &mut Self {
        let center = self.position;
        let delta = degrees.to_radians();
        for vertex in &mut self.vertices {
            let p = &mut vertex.position;
            (p.x, p.y) = rotate_in_plane((center.x, center.y), (p.x, p.y), delta);
        }
        self
    }

    /// Returns a copy rotated around the X axis.
    pub fn rotated_x(&self, degrees: f64) -> Self {
        let mut cube = self.clone();
        cube.rotate_x(degrees);
        cube
    }

    /// Returns a copy rotated around the Y axis.
    pub fn rotated_y(&self, degrees: f64) -> Self {
        let mut cube = self.clone();
        cube.rotate_y(degrees);
        cube
    }

    /// Returns a copy rotated around the Z axis.
    pub fn rotated_z(&self, degrees: f64) -> Self {
        let mut cube = self.clone();
        cube.rotate_z(degrees);
        cube
    }
}

/// Rotates `point` about `center` by `radians` through a polar round trip.
///
/// `a` is the cosine coordinate and `b` the sine coordinate. NaN and infinite
/// inputs flow through unchecked.
#[inline]
fn rotate_in_plane(center: (f64, f64), point: (f64, f64), radians: f64) -> (f64, f64) {
    let da = point.0 - center.0;
    let db = point.1 - center.1;
    let r = da.hypot(db);
    // Always atan2(b, a), paired with a = r·cos and b = r·sin below, so a zero
    // angle is the identity. Swapping the arguments would reflect (a, b)
    // across the a = b diagonal even at 0°.
    let theta = db.atan2(da) + radians;
    (center.0 + r * theta.cos(), center.1 + r * theta.sin())
}
