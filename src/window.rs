//! Interactive preview: redraws a scene straight onto an SDL canvas.

use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels;
use sdl2::render::Canvas;

use crate::scene::{RenderStats, Scene};

pub const FPS: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / FPS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Redraw,
}

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    scale: u32,
}

impl Window {
    /// Opens a window showing a `width` x `height` canvas, each pixel drawn as
    /// a `scale` x `scale` block.
    pub fn new(title: &str, width: u32, height: u32, scale: u32) -> Result<Self, String> {
        let scale = scale.max(1);
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        canvas.set_scale(scale as f32, scale as f32)?;
        let event_pump = sdl_context.event_pump()?;

        Ok(Self {
            canvas,
            event_pump,
            scale,
        })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Exposed,
                    ..
                } => result = WindowEvent::Redraw,
                _ => {}
            }
        }
        result
    }

    /// Clears to the scene background and rasterizes every face onto the canvas.
    pub fn draw_scene(&mut self, scene: &Scene) -> Result<RenderStats, Box<dyn std::error::Error>> {
        let [r, g, b] = scene.background;
        self.canvas.set_draw_color(pixels::Color::RGB(r, g, b));
        self.canvas.clear();
        let stats = scene.draw(&mut self.canvas)?;
        self.canvas.present();
        Ok(stats)
    }

    /// Shows `scene` until the window is closed or Escape is pressed.
    pub fn run(&mut self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
        let stats = self.draw_scene(scene)?;
        log::info!(
            "Previewing {} faces ({} pixels), press Escape to close",
            stats.drawn,
            stats.pixels
        );

        loop {
            match self.poll_events() {
                WindowEvent::Quit => break,
                WindowEvent::Redraw => {
                    self.draw_scene(scene)?;
                }
                WindowEvent::None => {}
            }
            std::thread::sleep(FRAME_TIME);
        }
        Ok(())
    }
}
