use super::KeyId;

/// Discrete event surfaced by the presentation layer, one per poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Quit,
    KeyDown(KeyId),
    KeyUp(KeyId),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Drawing surface handed to scenes during render.
pub trait Canvas {
    fn size(&self) -> (u32, u32);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Everything the loop scheduler needs from the windowing layer.
///
/// `poll_event` must never block. `now_millis` must be monotonic.
pub trait Platform: Canvas {
    fn poll_event(&mut self) -> Option<PlatformEvent>;
    fn present(&mut self);
    fn now_millis(&self) -> u64;
    fn set_title(&mut self, text: &str);
    fn sleep_millis(&mut self, millis: u64);
}
