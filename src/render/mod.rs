//! Depth-sorted rendering of a [`Cube`] into screen-space primitives.
//!
//! Two strategies are available and can be swapped at runtime:
//! - [`ShadedStrategy`]: filled faces shaded by depth, then a vertex overlay
//! - [`WireframeStrategy`]: the twelve cube edges, then a vertex overlay
//!
//! Projection is orthographic: a vertex's x and y are used directly as screen
//! coordinates and z only drives ordering and shading.
//!
//! Nothing here touches a drawing surface. Strategies return primitives in
//! back-to-front order and the caller draws them in that order.

pub mod face;
pub mod primitive;
pub mod shading;
pub mod sorting;

pub use face::{Edge, Face, CUBE_EDGES, CUBE_FACES};
pub use primitive::Primitive;
pub use shading::{ShadeDomain, ShadingConfig};
pub use sorting::{sorted_faces, sorted_vertices, DepthFace, DepthVertex};

use crate::colors;
use crate::cube::Cube;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Drops depth, keeping x and y as screen coordinates.
#[inline]
pub fn project(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Turns a cube into an ordered primitive list.
pub trait RenderStrategy {
    /// Render `cube` back to front.
    ///
    /// # Arguments
    /// * `cube` - The already rotated cube
    /// * `point_radius` - Radius of each vertex overlay point
    /// * `shading` - Depth ranges used for gray shading
    fn render(&self, cube: &Cube, point_radius: f64, shading: &ShadingConfig) -> Vec<Primitive>;
}

/// Filled faces sorted by mean depth, followed by depth-shaded vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadedStrategy;

impl RenderStrategy for ShadedStrategy {
    fn render(&self, cube: &Cube, point_radius: f64, shading: &ShadingConfig) -> Vec<Primitive> {
        let faces = sorted_faces(cube);
        let vertices = sorted_vertices(cube);
        let mut primitives = Vec::with_capacity(faces.len() + vertices.len());

        primitives.extend(faces.iter().map(|face| Primitive::Polygon {
            points: face.corners.iter().copied().map(project).collect(),
            color: shading.faces.shade(face.avg_depth),
        }));

        primitives.extend(vertices.iter().map(|v| Primitive::Point {
            center: project(v.vertex.position),
            radius: point_radius,
            color: shading.vertices.shade(v.depth()),
        }));

        primitives
    }
}

/// Cube edges in fixed order, followed by depth-sorted vertices drawn with
/// their slab color.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireframeStrategy;

impl RenderStrategy for WireframeStrategy {
    fn render(&self, cube: &Cube, point_radius: f64, shading: &ShadingConfig) -> Vec<Primitive> {
        let positions = cube.vertices().map(|v| v.position);
        let vertices = sorted_vertices(cube);
        let mut primitives = Vec::with_capacity(CUBE_EDGES.len() + vertices.len());

        // Edges share one color, so their order does not affect the image.
        primitives.extend(CUBE_EDGES.iter().map(|&Edge(a, b)| Primitive::Line {
            start: project(positions[a]),
            end: project(positions[b]),
            color: colors::WIREFRAME,
        }));

        primitives.extend(vertices.iter().map(|v| Primitive::Point {
            center: project(v.vertex.position),
            radius: point_radius,
            color: v
                .vertex
                .color
                .unwrap_or_else(|| shading.vertices.shade(v.depth())),
        }));

        primitives
    }
}

/// Available rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Edge lines plus vertex points (key: 1)
    Wireframe,
    /// Depth-shaded filled faces plus vertex points (key: 2)
    #[default]
    Shaded,
}

impl RenderMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Wireframe => RenderMode::Shaded,
            RenderMode::Shaded => RenderMode::Wireframe,
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Shaded => write!(f, "Shaded"),
        }
    }
}

/// Holds both strategies and forwards to the one selected by [`RenderMode`].
#[derive(Debug, Clone, Default)]
pub struct StrategyDispatcher {
    shaded: ShadedStrategy,
    wireframe: WireframeStrategy,
}

impl StrategyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(&self, mode: RenderMode) -> &dyn RenderStrategy {
        match mode {
            RenderMode::Shaded => &self.shaded,
            RenderMode::Wireframe => &self.wireframe,
        }
    }
}
