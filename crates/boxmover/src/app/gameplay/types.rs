#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Sprite {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}
