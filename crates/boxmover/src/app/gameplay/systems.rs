use engine::InputState;

use super::{Direction, Sprite, DIRECTION_PRIORITY};

pub(crate) fn held_direction(input: &InputState) -> Option<Direction> {
    DIRECTION_PRIORITY
        .iter()
        .find(|(key, _)| input.is_held(*key))
        .map(|(_, direction)| *direction)
}

/// Moves along exactly one axis. Screen space: y grows downward.
pub(crate) fn step_sprite(sprite: Sprite, direction: Direction, speed: i32) -> Sprite {
    match direction {
        Direction::Left => Sprite {
            x: sprite.x.saturating_sub(speed),
            ..sprite
        },
        Direction::Right => Sprite {
            x: sprite.x.saturating_add(speed),
            ..sprite
        },
        Direction::Up => Sprite {
            y: sprite.y.saturating_sub(speed),
            ..sprite
        },
        Direction::Down => Sprite {
            y: sprite.y.saturating_add(speed),
            ..sprite
        },
    }
}
