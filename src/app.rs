//! The interactive frame loop.
//!
//! Each frame: poll events, update the caller-owned [`HarnessState`], clear
//! the canvas, render the cube, draw the primitives in order, present, then
//! wait for the next tick.

use log::{debug, info, trace};

use crate::canvas::Canvas;
use crate::colors;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use crate::input::InputState;
use crate::state::HarnessState;
use crate::window::{FrameLimiter, Window, WindowEvent};

/// Clears `canvas` and draws one frame for the current state.
///
/// Returns the number of primitives drawn.
pub fn draw_frame(
    engine: &mut Engine,
    canvas: &mut Canvas,
    state: &HarnessState,
    config: &Config,
) -> usize {
    engine.set_render_mode(state.mode);

    canvas.clear(colors::BACKGROUND);
    if config.draw_grid {
        canvas.draw_grid(config.grid_spacing, colors::GRID);
    }

    let primitives = engine.render(
        config.position,
        state.rotation,
        config.scale,
        config.point_radius,
    );
    canvas.draw_all(&primitives);
    primitives.len()
}

/// Opens the window and runs until the user quits.
pub fn run(config: Config) -> Result<()> {
    config.validate()?;

    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut canvas = Canvas::new(config.width, config.height);
    let mut engine = Engine::new(config.shading);
    let mut state = HarnessState::new(&config);
    let mut input = InputState::new();
    let mut limiter = FrameLimiter::new(&window, config.frame_target_time());

    info!(
        "running at {} fps in {} mode (1/2 switch mode, arrows/WASD/Q/E rotate, space toggles spin)",
        config.fps, state.mode
    );

    while state.running {
        input.begin_frame();
        match window.poll_events(&mut input) {
            WindowEvent::Quit => {
                state.request_quit();
                continue;
            }
            WindowEvent::Resize(w, h) => {
                debug!("resize to {w}x{h}");
                window.resize(w, h)?;
                canvas.resize(w, h);
            }
            WindowEvent::None => {}
        }

        state.apply_input(&input, &config);
        let drawn = draw_frame(&mut engine, &mut canvas, &state, &config);
        window.present(canvas.as_bytes())?;

        let delta = limiter.wait_and_get_delta(&window);
        trace!("frame: {drawn} primitives, {delta} ms");
    }

    info!("window closed");
    Ok(())
}
