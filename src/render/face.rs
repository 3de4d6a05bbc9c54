//! Fixed connectivity of the cube: quadrilateral faces and edges.
//!
//! These never change with rotation; only the depth order of the faces does.

use crate::cube::{Cube, VERTEX_COUNT};
use crate::math::vec3::Vec3;

pub const N_NUM_FACES: usize = 6;
pub const N_NUM_EDGES: usize = 12;

/// Four vertex indices wound so the quad fills without self-intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face(pub [usize; 4]);

/// Two vertex indices joined by a cube edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge(pub usize, pub usize);

pub const BACK: Face = Face([0, 1, 3, 2]);
pub const FRONT: Face = Face([4, 5, 7, 6]);
pub const LEFT: Face = Face([0, 4, 6, 2]);
pub const RIGHT: Face = Face([1, 5, 7, 3]);
pub const TOP: Face = Face([0, 4, 5, 1]);
pub const BOTTOM: Face = Face([2, 6, 7, 3]);

pub const CUBE_FACES: [Face; N_NUM_FACES] = [BACK, FRONT, LEFT, RIGHT, TOP, BOTTOM];

pub const CUBE_EDGES: [Edge; N_NUM_EDGES] = [
    // Back slab
    Edge(0, 2),
    Edge(2, 3),
    Edge(1, 3),
    Edge(0, 1),
    // Front slab
    Edge(4, 6),
    Edge(6, 7),
    Edge(5, 7),
    Edge(4, 5),
    // Between slabs
    Edge(0, 4),
    Edge(1, 5),
    Edge(2, 6),
    Edge(3, 7),
];

// Every index above must address one of the cube's vertices.
const _: () = {
    let mut i = 0;
    while i < N_NUM_FACES {
        let mut j = 0;
        while j < 4 {
            assert!(CUBE_FACES[i].0[j] < VERTEX_COUNT);
            j += 1;
        }
        i += 1;
    }
    let mut i = 0;
    while i < N_NUM_EDGES {
        assert!(CUBE_EDGES[i].0 < VERTEX_COUNT && CUBE_EDGES[i].1 < VERTEX_COUNT);
        i += 1;
    }
};

impl Face {
    /// Positions of the face's corners in winding order.
    pub fn corners(&self, cube: &Cube) -> [Vec3; 4] {
        self.0.map(|i| cube.vertices()[i].position)
    }

    /// Mean z of the four corners.
    pub fn avg_depth(&self, cube: &Cube) -> f64 {
        self.corners(cube).iter().map(|p| p.z).sum::<f64>() / 4.0
    }
}
