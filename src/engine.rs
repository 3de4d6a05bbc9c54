//! Per-frame entry point.
//!
//! The [`Engine`] builds a fresh [`Cube`] from absolute angles on every call
//! and hands it to the selected strategy. It keeps no geometry between calls,
//! so it can be driven at any rate without drift.

use log::trace;

use crate::cube::Cube;
use crate::math::vec3::Vec3;
use crate::render::{Primitive, RenderMode, ShadingConfig, StrategyDispatcher};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    strategies: StrategyDispatcher,
    shading: ShadingConfig,
    render_mode: RenderMode,
}

impl Engine {
    pub fn new(shading: ShadingConfig) -> Self {
        Self {
            strategies: StrategyDispatcher::new(),
            shading,
            render_mode: RenderMode::default(),
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Render an already built cube with the active strategy.
    pub fn render_cube(&self, cube: &Cube, point_radius: f64) -> Vec<Primitive> {
        self.strategies
            .strategy(self.render_mode)
            .render(cube, point_radius, &self.shading)
    }

    /// Build a cube from `position`, `rotation` (degrees) and `scale`, then
    /// render it. The result is ordered back to front.
    pub fn render(
        &self,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
        point_radius: f64,
    ) -> Vec<Primitive> {
        let cube = Cube::new(position, rotation, scale);
        let primitives = self.render_cube(&cube, point_radius);
        trace!(
            "rendered {} primitives ({}) at rotation ({:.1}, {:.1}, {:.1})",
            primitives.len(),
            self.render_mode,
            rotation.x,
            rotation.y,
            rotation.z
        );
        primitives
    }
}

/// Render one frame with the default shading ranges.
pub fn render(
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    point_radius: f64,
    mode: RenderMode,
) -> Vec<Primitive> {
    let mut engine = Engine::default();
    engine.set_render_mode(mode);
    engine.render(position, rotation, scale, point_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{sorted_faces, sorted_vertices};

    #[test]
    fn shaded_frame_end_to_end() {
        let position = Vec3::new(100.0, 100.0, 0.0);
        let scale = Vec3::splat(50.0);
        let primitives = render(position, Vec3::ZERO, scale, 3.0, RenderMode::Shaded);

        let polygons: Vec<_> = primitives.iter().filter(|p| p.is_polygon()).collect();
        let points: Vec<_> = primitives.iter().filter(|p| p.is_point()).collect();
        assert_eq!(polygons.len(), 6);
        assert_eq!(points.len(), 8);
        assert_eq!(primitives.len(), 14);

        // Faces first, then the vertex overlay, each back to front.
        assert!(primitives[..6].iter().all(Primitive::is_polygon));
        let cube = Cube::new(position, Vec3::ZERO, scale);
        let face_depths: Vec<f64> = sorted_faces(&cube).iter().map(|f| f.avg_depth).collect();
        assert!(face_depths.windows(2).all(|w| w[0] <= w[1]));
        let vertex_depths: Vec<f64> = sorted_vertices(&cube).iter().map(|v| v.depth()).collect();
        assert!(vertex_depths.windows(2).all(|w| w[0] <= w[1]));

        // Colors are u8 triples; shaded output is always gray.
        for primitive in &primitives {
            let c = primitive.color();
            assert!(c.r == c.g && c.g == c.b);
        }
    }

    #[test]
    fn wireframe_frame_end_to_end() {
        let primitives = render(
            Vec3::new(100.0, 100.0, 0.0),
            Vec3::ZERO,
            Vec3::splat(50.0),
            3.0,
            RenderMode::Wireframe,
        );
        assert_eq!(primitives.iter().filter(|p| p.is_line()).count(), 12);
        assert_eq!(primitives.iter().filter(|p| p.is_point()).count(), 8);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let engine = Engine::default();
        let args = (Vec3::new(5.0, 6.0, 7.0), Vec3::new(12.0, 250.0, -8.0), Vec3::splat(9.0));
        let first = engine.render(args.0, args.1, args.2, 2.0);
        let _ = engine.render(Vec3::ZERO, Vec3::splat(33.0), Vec3::ONE, 1.0);
        let second = engine.render(args.0, args.1, args.2, 2.0);
        assert_eq!(first, second);
    }

    #[test]
    fn render_mode_switches_strategy() {
        let mut engine = Engine::new(ShadingConfig::default());
        assert_eq!(engine.render_mode(), RenderMode::Shaded);
        engine.set_render_mode(RenderMode::Wireframe);
        let primitives = engine.render(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 1.0);
        assert!(primitives.iter().any(Primitive::is_line));
    }
}
