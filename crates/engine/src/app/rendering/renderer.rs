use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::app::{Color, Rect};

/// Fixed-size RGBA framebuffer scaled onto the window surface.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, Error> {
        let surface_size = window.inner_size();
        let surface = SurfaceTexture::new(
            surface_size.width.max(1),
            surface_size.height.max(1),
            Arc::clone(&window),
        );
        let pixels = Pixels::new(width, height, surface)?;
        Ok(Self {
            window,
            pixels,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        fill_rect_clipped(
            self.pixels.frame_mut(),
            self.width,
            self.height,
            rect,
            color.to_rgba(),
        );
    }

    pub fn present(&mut self) -> Result<(), Error> {
        self.pixels.render()
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Writes `color` into every pixel of `rect` that lies inside the frame.
fn fill_rect_clipped(frame: &mut [u8], width: u32, height: u32, rect: Rect, color: [u8; 4]) {
    let left = i64::from(rect.x).max(0);
    let top = i64::from(rect.y).max(0);
    let right = (i64::from(rect.x) + i64::from(rect.w)).min(i64::from(width));
    let bottom = (i64::from(rect.y) + i64::from(rect.h)).min(i64::from(height));
    if left >= right || top >= bottom {
        return;
    }

    let stride = width as usize * 4;
    for y in top as usize..bottom as usize {
        let row_start = y * stride + left as usize * 4;
        let row_end = y * stride + right as usize * 4;
        let Some(row) = frame.get_mut(row_start..row_end) else {
            return;
        };
        for pixel in row.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }
}
