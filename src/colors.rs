//! Color type and the palette used by the renderer and harness.

/// An 8-bit-per-channel RGB color.
///
/// Channels are `u8`, so every color the renderer produces is a valid
/// [0, 255] triple by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray with the same intensity on all three channels.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Packs the color as opaque ARGB8888, the canvas pixel format.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const DARK_GRAY: Rgb = Rgb::new(40, 40, 40);
pub const GRAY: Rgb = Rgb::new(100, 100, 100);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Clear color of the drawing surface.
pub const BACKGROUND: Rgb = BLACK;
/// Optional background grid.
pub const GRID: Rgb = DARK_GRAY;
/// Cube edges in wireframe mode.
pub const WIREFRAME: Rgb = Rgb::new(0, 0, 255);
/// Tag for the four back-slab vertices.
pub const BACK_VERTEX: Rgb = GRAY;
/// Tag for the four front-slab vertices.
pub const FRONT_VERTEX: Rgb = WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        assert_eq!(BLACK.to_argb(), 0xFF000000);
        assert_eq!(WHITE.to_argb(), 0xFFFFFFFF);
        assert_eq!(WIREFRAME.to_argb(), 0xFF0000FF);
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_argb(), 0xFF123456);
    }

    #[test]
    fn gray_sets_all_channels() {
        assert_eq!(Rgb::gray(40), DARK_GRAY);
    }
}
