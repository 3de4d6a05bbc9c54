//! Painter's algorithm ordering.
//!
//! Everything is sorted ascending by z: the farthest item comes first and the
//! nearest last, so drawing in order lets near shapes cover far ones.

use crate::cube::{Cube, Vertex};
use crate::math::vec3::Vec3;

use super::face::{Face, CUBE_FACES};

/// A face with its corners and mean depth resolved for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthFace {
    pub face: Face,
    pub corners: [Vec3; 4],
    pub avg_depth: f64,
}

/// A vertex tagged with its index in the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthVertex {
    pub index: usize,
    pub vertex: Vertex,
}

impl DepthVertex {
    pub fn depth(&self) -> f64 {
        self.vertex.position.z
    }
}

/// Stable sort by depth, farthest first.
///
/// Uses `f64::total_cmp` so NaN depths get a fixed place instead of
/// panicking.
pub fn sort_by_depth_ascending<T>(items: &mut [T], depth: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| depth(a).total_cmp(&depth(b)));
}

/// All six faces of `cube`, back to front by mean z.
pub fn sorted_faces(cube: &Cube) -> Vec<DepthFace> {
    let mut faces: Vec<DepthFace> = CUBE_FACES
        .iter()
        .map(|&face| DepthFace {
            face,
            corners: face.corners(cube),
            avg_depth: face.avg_depth(cube),
        })
        .collect();
    sort_by_depth_ascending(&mut faces, |f| f.avg_depth);
    faces
}

/// All eight vertices of `cube`, back to front by z.
pub fn sorted_vertices(cube: &Cube) -> Vec<DepthVertex> {
    let mut vertices: Vec<DepthVertex> = cube
        .vertices()
        .iter()
        .enumerate()
        .map(|(index, &vertex)| DepthVertex { index, vertex })
        .collect();
    sort_by_depth_ascending(&mut vertices, DepthVertex::depth);
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::face::{BACK, FRONT, LEFT, RIGHT};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::SQRT_2;

    /// Origin-centered cube of side 10 turned 45 degrees about Y only.
    ///
    /// With Y adding the angle, offsets (x, z) go to:
    /// (-5,-5) -> z = -5√2, (5,-5) -> z = 0, (-5,5) -> z = 0, (5,5) -> z = 5√2.
    fn cube_yawed_45() -> Cube {
        Cube::new(Vec3::ZERO, Vec3::new(90.0, 45.0, 90.0), Vec3::splat(10.0))
    }

    #[test]
    fn vertices_sorted_by_hand_computed_depth() {
        let sorted = sorted_vertices(&cube_yawed_45());
        assert_eq!(sorted.len(), 8);

        for pair in sorted.windows(2) {
            assert!(pair[0].depth() <= pair[1].depth());
        }

        let mut farthest = [sorted[0].index, sorted[1].index];
        farthest.sort();
        assert_eq!(farthest, [0, 2]);

        let mut nearest = [sorted[6].index, sorted[7].index];
        nearest.sort();
        assert_eq!(nearest, [5, 7]);

        assert_abs_diff_eq!(sorted[0].depth(), -5.0 * SQRT_2, epsilon = 1e-9);
        assert_abs_diff_eq!(sorted[7].depth(), 5.0 * SQRT_2, epsilon = 1e-9);
        for middle in &sorted[2..6] {
            assert_abs_diff_eq!(middle.depth(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn faces_sorted_by_hand_computed_depth() {
        let sorted = sorted_faces(&cube_yawed_45());
        assert_eq!(sorted.len(), 6);

        for pair in sorted.windows(2) {
            assert!(pair[0].avg_depth <= pair[1].avg_depth);
        }

        // Back and left share the -5√2 corners, front and right the +5√2 ones.
        let farthest = [sorted[0].face, sorted[1].face];
        assert!(farthest.contains(&BACK) && farthest.contains(&LEFT));
        let nearest = [sorted[4].face, sorted[5].face];
        assert!(nearest.contains(&FRONT) && nearest.contains(&RIGHT));

        assert_abs_diff_eq!(sorted[0].avg_depth, -2.5 * SQRT_2, epsilon = 1e-9);
        assert_abs_diff_eq!(sorted[5].avg_depth, 2.5 * SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn faces_are_always_the_fixed_set() {
        for rotation in [Vec3::ZERO, Vec3::new(13.0, 77.0, -200.0), Vec3::splat(45.0)] {
            let cube = Cube::new(Vec3::new(100.0, 100.0, 0.0), rotation, Vec3::splat(50.0));
            let sorted = sorted_faces(&cube);
            for face in CUBE_FACES {
                assert_eq!(sorted.iter().filter(|f| f.face == face).count(), 1);
            }
        }
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut items = [(1.0, 'a'), (0.0, 'b'), (1.0, 'c'), (0.0, 'd')];
        sort_by_depth_ascending(&mut items, |item| item.0);
        assert_eq!(items.map(|item| item.1), ['b', 'd', 'a', 'c']);
    }

    #[test]
    fn nan_depth_does_not_panic() {
        let mut items = [2.0, f64::NAN, -1.0];
        sort_by_depth_ascending(&mut items, |z| *z);
        assert_eq!(items[0], -1.0);
        assert_eq!(items[1], 2.0);
        assert!(items[2].is_nan());
    }
}
