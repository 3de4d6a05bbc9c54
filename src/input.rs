//! Keyboard state, independent of the windowing backend.
//!
//! The window feeds key transitions in; the frame loop reads which keys are
//! held (continuous rotation) and which went down this frame (toggles).

/// Keys the harness reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Roll counter-clockwise.
    Q,
    /// Roll clockwise.
    E,
    /// Wireframe mode.
    Num1,
    /// Shaded mode.
    Num2,
    /// Toggle auto-spin.
    Space,
}

impl Key {
    pub const COUNT: usize = 9;

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; Key::COUNT],
    pressed: [bool; Key::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's presses. Held keys stay held.
    pub fn begin_frame(&mut self) {
        self.pressed = [false; Key::COUNT];
    }

    /// Records a key going down. Auto-repeat while held is not a new press.
    pub fn key_down(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// True only on the frame the key went down.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// -1, 0 or +1 depending on which of the two keys is held.
    pub fn axis(&self, negative: Key, positive: Key) -> f64 {
        match (self.is_held(negative), self.is_held(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
