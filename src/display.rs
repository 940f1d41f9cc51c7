//! SDL2 window that shows a `PixelBuffer`

use crate::canvas::PixelBuffer;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Packed SDL format whose in-memory byte order is R, G, B, A
#[cfg(target_endian = "little")]
const FRAMEBUFFER_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const FRAMEBUFFER_FORMAT: PixelFormatEnum = PixelFormatEnum::RGBA8888;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
}

impl Display {
    /// Create a window of the given size.
    /// vsync=false gives an uncapped framerate for performance testing.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;
        log::info!("opened {}x{} window (vsync {})", width, height, vsync);

        Ok((Self { canvas, event_pump }, texture_creator))
    }

    /// Upload the framebuffer bytes and flip
    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
    ) -> Result<(), String> {
        if buffer.width() != target.width || buffer.height() != target.height {
            return Err(format!(
                "buffer is {}x{} but render target is {}x{}",
                buffer.width(),
                buffer.height(),
                target.width,
                target.height
            ));
        }
        target
            .texture
            .update(None, buffer.as_bytes(), buffer.stride())
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => Some(InputEvent::KeyDown(k)),
                _ => None,
            })
            .collect()
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(FRAMEBUFFER_FORMAT, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
