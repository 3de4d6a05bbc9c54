//! SDL2 window, event pump and frame pacing.
//!
//! SDL is only used to get pixels on screen and read the keyboard. All
//! drawing happens on the CPU in [`crate::canvas::Canvas`].

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{Error, Result};
use crate::input::{InputState, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_time: f64,
}

impl FrameLimiter {
    /// `frame_target_time` is the frame budget in milliseconds, see
    /// [`crate::config::Config::frame_target_time`].
    pub fn new(window: &Window, frame_target_time: f64) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_time,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        let target = self.frame_target_time as u64;
        if delta_time < target {
            let time_to_wait = target - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

// Fields drop in declaration order. `texture` must come first so it is
// destroyed while the renderer owned by `canvas`/`texture_creator` is alive.
pub struct Window {
    texture: sdl2::render::Texture<'static>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Sdl)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

        // SAFETY: texture_creator is heap-allocated and never moved or replaced
        // while Window lives. `texture` is the first field, so it drops before
        // `canvas` and `texture_creator` release the renderer.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Sdl(e.to_string()))?;

        info!("opened {width}x{height} window \"{title}\"");

        Ok(Self {
            texture,
            canvas,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending events into `input`.
    ///
    /// Returns `Quit` if a quit was requested (window close or Escape),
    /// otherwise the last resize seen, otherwise `None`.
    pub fn poll_events(&mut self, input: &mut InputState) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => result = WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        input.key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        input.key_up(key);
                    }
                }
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } if result != WindowEvent::Quit => {
                    result = WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32);
                }
                _ => {}
            }
        }
        result
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| Error::Sdl(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(Error::Sdl)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new(). The old texture is dropped by the assignment
        // below while the renderer is still alive.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Sdl(e.to_string()))?;
        Ok(())
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn map_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Up | Keycode::W => Some(Key::Up),
        Keycode::Down | Keycode::S => Some(Key::Down),
        Keycode::Left | Keycode::A => Some(Key::Left),
        Keycode::Right | Keycode::D => Some(Key::Right),
        Keycode::Q => Some(Key::Q),
        Keycode::E => Some(Key::E),
        Keycode::Num1 => Some(Key::Num1),
        Keycode::Num2 => Some(Key::Num2),
        Keycode::Space => Some(Key::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Opens a real window; run with `--ignored` on a machine with a display.
    #[test]
    #[ignore = "requires a video device"]
    fn open_resize_and_close() {
        let mut window = Window::new("pseudo3d test", 64, 48).expect("window");
        let canvas = crate::canvas::Canvas::new(64, 48);
        window.present(canvas.as_bytes()).expect("present");

        window.resize(32, 32).expect("resize");
        let canvas = crate::canvas::Canvas::new(32, 32);
        window.present(canvas.as_bytes()).expect("present after resize");

        // Texture is released before the renderer here.
        drop(window);
    }

    #[test]
    fn keycodes_map_to_keys() {
        assert_eq!(map_keycode(Keycode::Up), Some(Key::Up));
        assert_eq!(map_keycode(Keycode::A), Some(Key::Left));
        assert_eq!(map_keycode(Keycode::Num2), Some(Key::Num2));
        assert_eq!(map_keycode(Keycode::Z), None);
    }
}
