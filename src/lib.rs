//! A pseudo-3D cube renderer.
//!
//! A cube is rebuilt from absolute rotation angles every frame, rotated about
//! its center through polar coordinates, and turned into screen-space
//! primitives ordered back to front (painter's algorithm). There is no
//! perspective: x and y map straight to the screen and z only drives ordering
//! and gray shading.
//!
//! SDL2 is used only for the window and keyboard. All drawing is done on the
//! CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use pseudo3d::prelude::*;
//!
//! let primitives = render(
//!     Vec3::new(100.0, 100.0, 0.0),
//!     Vec3::ZERO,
//!     Vec3::splat(50.0),
//!     3.0,
//!     RenderMode::Shaded,
//! );
//! let mut canvas = Canvas::new(500, 500);
//! canvas.draw_all(&primitives);
//! ```

// Public API - exposed to library consumers
pub mod app;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod cube;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod state;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use cube::{Cube, Vertex};
pub use engine::{render, Engine};
pub use error::{ConfigError, Error, Result};
pub use render::{Primitive, RenderMode};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use pseudo3d::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::cube::{Cube, Vertex, NEUTRAL_ROTATION};

    // Engine
    pub use crate::engine::{render, Engine};

    // Rendering
    pub use crate::colors::Rgb;
    pub use crate::render::{
        Primitive, RenderMode, RenderStrategy, ShadeDomain, ShadedStrategy, ShadingConfig,
        WireframeStrategy,
    };

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Harness
    pub use crate::canvas::Canvas;
    pub use crate::config::Config;
    pub use crate::input::{InputState, Key};
    pub use crate::state::HarnessState;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
