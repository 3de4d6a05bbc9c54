//! Caller-owned state carried between frames.
//!
//! The engine rebuilds the cube from absolute angles every frame, so the
//! accumulated rotation lives here with the rest of the loop's state.

use log::debug;

use crate::config::Config;
use crate::input::{InputState, Key};
use crate::math::vec3::Vec3;
use crate::render::RenderMode;

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessState {
    pub running: bool,
    /// Accumulated rotation in degrees, each axis kept in [0, 360).
    pub rotation: Vec3,
    pub mode: RenderMode,
    pub auto_spin: bool,
}

impl HarnessState {
    pub fn new(config: &Config) -> Self {
        Self {
            running: true,
            rotation: Vec3::ZERO,
            mode: config.mode,
            auto_spin: config.auto_spin_enabled,
        }
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Advance one frame of input.
    ///
    /// Up/Down turn about X, Left/Right about Y and Q/E about Z by
    /// `config.rotation_step` degrees per frame held. 1 and 2 pick the
    /// wireframe or shaded strategy, Space toggles auto-spin.
    pub fn apply_input(&mut self, input: &InputState, config: &Config) {
        if input.was_pressed(Key::Num1) {
            self.set_mode(RenderMode::Wireframe);
        }
        if input.was_pressed(Key::Num2) {
            self.set_mode(RenderMode::Shaded);
        }
        if input.was_pressed(Key::Space) {
            self.auto_spin = !self.auto_spin;
            debug!("auto-spin {}", if self.auto_spin { "on" } else { "off" });
        }

        let step = config.rotation_step;
        let mut delta = Vec3::new(
            input.axis(Key::Down, Key::Up),
            input.axis(Key::Left, Key::Right),
            input.axis(Key::Q, Key::E),
        ) * step;

        if self.auto_spin {
            delta = delta + config.auto_spin;
        }

        self.rotate(delta);
    }

    /// Adds `delta` degrees, wrapping each axis into [0, 360).
    pub fn rotate(&mut self, delta: Vec3) {
        let r = self.rotation + delta;
        self.rotation = Vec3::new(
            r.x.rem_euclid(360.0),
            r.y.rem_euclid(360.0),
            r.z.rem_euclid(360.0),
        );
    }

    fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            debug!("render mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }
}
