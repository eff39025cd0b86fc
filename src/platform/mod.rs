//! Native platform layer
//!
//! Owns the window, the pixel surface and the frame pacer. The game itself
//! only ever sees a `FrameInput` per frame and a canvas to draw on.

pub mod input;

use std::time::{Duration, Instant};

use glam::IVec2;
use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::consts::{HEIGHT, WIDTH};
use crate::error::Result;
use crate::highscores::ScoreStore;
use crate::renderer::{self, Canvas};
use crate::screen::{Game, Screen};
use crate::settings::Settings;
use input::InputTracker;

pub const WINDOW_TITLE: &str = "Breakout Game";

/// Fixed-rate frame scheduler. Late frames are dropped, not caught up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next: now,
        }
    }

    /// Deadline of the next frame
    pub fn next_frame(&self) -> Instant {
        self.next
    }

    /// True (and schedules the following frame) when a frame is due at `now`
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

/// Open the window and run until the game reaches `Screen::Quit`.
///
/// Only returns on setup failure; a clean quit exits the process from
/// inside the event loop.
pub fn run(settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new();
    let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        PixelsBuilder::new(WIDTH as u32, HEIGHT as u32, surface_texture)
            .enable_vsync(settings.vsync)
            .build()?
    };

    let seed = settings.resolve_seed();
    let store = ScoreStore::new(settings.score_file);
    log::info!(
        "Window {}x{} at {} fps, scores in {}, seed {}",
        WIDTH,
        HEIGHT,
        settings.target_fps,
        store.path().display(),
        seed
    );

    let mut game = Game::new(store, seed);
    let mut input = InputTracker::default();
    let mut pacer = FramePacer::new(settings.target_fps, Instant::now());

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(new_size) => {
                if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                    log::error!("Surface resize failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = pixels
                    .window_pos_to_pixel((position.x as f32, position.y as f32))
                    .ok()
                    .map(|(x, y)| IVec2::new(x as i32, y as i32));
                input.cursor_moved(pos);
            }
            other => input.handle_window_event(&other),
        },
        Event::MainEventsCleared => {
            if pacer.due(Instant::now()) {
                let frame = input.take_frame();
                if game.update(&frame) == Screen::Quit {
                    log::info!("Quitting");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                window.request_redraw();
            }
            *control_flow = ControlFlow::WaitUntil(pacer.next_frame());
        }
        Event::RedrawRequested(_) => {
            let mut canvas = Canvas::new(pixels.frame_mut(), WIDTH as u32, HEIGHT as u32);
            renderer::draw(&game, &mut canvas);
            if let Err(err) = pixels.render() {
                log::error!("Render error: {}", err);
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_sixty_fps() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);
        assert!(pacer.due(start));
        assert!(!pacer.due(start));
        assert!(!pacer.due(start + Duration::from_millis(10)));
        assert!(pacer.due(start + Duration::from_millis(17)));
        let interval = Duration::from_secs_f64(1.0 / 60.0);
        assert_eq!(pacer.next_frame(), start + interval * 2);
    }

    #[test]
    fn test_pacer_drops_missed_frames() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);
        assert!(pacer.due(start));
        let late = start + Duration::from_secs(1);
        assert!(pacer.due(late));
        // One frame, not sixty, after a long stall
        assert!(!pacer.due(late));
        assert_eq!(pacer.next_frame(), late + Duration::from_secs_f64(1.0 / 60.0));
    }
}
