//! CPU drawing surface.
//!
//! [`Canvas`] owns an ARGB8888 color buffer and rasterizes the renderer's
//! primitives into it. Primitives are drawn without a depth buffer, so the
//! caller's back-to-front order decides what ends up on top.

use crate::colors::{self, Rgb};
use crate::math::vec2::Vec2;
use crate::render::Primitive;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND.to_argb(); size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Rgb) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: Rgb) {
        let color = color.to_argb();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw every primitive in order.
    pub fn draw_all(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            self.draw(primitive);
        }
    }

    /// Rasterize one primitive. Primitives with non-finite coordinates are
    /// skipped.
    pub fn draw(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Point {
                center,
                radius,
                color,
            } => self.fill_circle(*center, *radius, color.to_argb()),
            Primitive::Line { start, end, color } => {
                if let Some((start, end)) = self.clip_line(*start, *end) {
                    self.draw_line(
                        start.x.round() as i32,
                        start.y.round() as i32,
                        end.x.round() as i32,
                        end.y.round() as i32,
                        color.to_argb(),
                    );
                }
            }
            Primitive::Polygon { points, color } => self.fill_polygon(points, color.to_argb()),
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Steps along the major axis one pixel at a time and tracks an integer
    /// error term to decide when to also step along the minor axis.
    ///
    /// Steps are taken in `i64` so endpoints anywhere in the `i32` range
    /// cannot overflow. The walk is not clipped; callers with off-screen
    /// geometry should go through [`Canvas::draw`].
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            // Only in-range coordinates reach the i32 pixel setter.
            if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
                self.set_pixel(px, py, color);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can hold, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Clips a segment to the canvas rectangle (Liang-Barsky).
    ///
    /// Returns `None` when the segment misses the canvas or has a non-finite
    /// endpoint. The result always lies within the pixel grid, so the
    /// Bresenham walk is bounded by the canvas size.
    fn clip_line(&self, start: Vec2, end: Vec2) -> Option<(Vec2, Vec2)> {
        if !is_finite(start) || !is_finite(end) || self.width == 0 || self.height == 0 {
            return None;
        }

        let x_max = (self.width - 1) as f64;
        let y_max = (self.height - 1) as f64;
        let d = end - start;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-d.x, start.x),
            (d.x, x_max - start.x),
            (-d.y, start.y),
            (d.y, y_max - start.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| Vec2::new(start.x + t * d.x, start.y + t * d.y);
        Some((at(t0), at(t1)))
    }

    /// Fills every pixel whose center lies within `radius` of `center`.
    pub fn fill_circle(&mut self, center: Vec2, radius: f64, color: u32) {
        if !is_finite(center) || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let r_sq = radius * radius;
        let x_min = ((center.x - radius).floor() as i32).max(0);
        let x_max = ((center.x + radius).ceil() as i32).min(self.width as i32 - 1);
        let y_min = ((center.y - radius).floor() as i32).max(0);
        let y_max = ((center.y + radius).ceil() as i32).min(self.height as i32 - 1);

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Scanline polygon fill using the even-odd rule.
    ///
    /// Each row is sampled at its pixel center; crossings with the polygon's
    /// edges are sorted and the spans between pairs are filled.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: u32) {
        if points.len() < 3 || !points.iter().all(|p| is_finite(*p)) {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let y_start = (min_y.floor() as i32).max(0);
        let y_end = (max_y.ceil() as i32).min(self.height as i32 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for y in y_start..=y_end {
            let sample_y = y as f64 + 0.5;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= sample_y && sample_y < b.y) || (b.y <= sample_y && sample_y < a.y) {
                    let edge = b - *a;
                    crossings.push(a.x + (sample_y - a.y) * edge.x / edge.y);
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let x_start = ((span[0] - 0.5).ceil() as i32).max(0);
                let x_end = ((span[1] - 0.5).floor() as i32).min(self.width as i32 - 1);
                for x in x_start..=x_end {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// The color buffer as raw bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.color_buffer.as_slice())
    }
}

fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
