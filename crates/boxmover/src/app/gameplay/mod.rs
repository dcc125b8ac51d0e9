use engine::{Canvas, Color, InputState, KeyId, Rect, Scene};

mod systems;
mod types;

pub(crate) use systems::{held_direction, step_sprite};
pub(crate) use types::{Direction, Sprite};

const HERO_SPEED: i32 = 2;
const HERO_SIZE_PX: u32 = 20;
const CLEAR_COLOR: Color = Color::WHITE;
const HERO_COLOR: Color = Color::RED;

/// First held key in this list wins the tick.
const DIRECTION_PRIORITY: [(KeyId, Direction); 4] = [
    (KeyId::Left, Direction::Left),
    (KeyId::Right, Direction::Right),
    (KeyId::Up, Direction::Up),
    (KeyId::Down, Direction::Down),
];

pub(crate) struct HeroScene {
    hero: Sprite,
    speed: i32,
}

impl HeroScene {
    pub(crate) fn new() -> Self {
        Self {
            hero: Sprite::default(),
            speed: HERO_SPEED,
        }
    }

    #[cfg(test)]
    pub(crate) fn hero(&self) -> Sprite {
        self.hero
    }
}

impl Scene for HeroScene {
    fn update(&mut self, input: &InputState) {
        if let Some(direction) = held_direction(input) {
            self.hero = step_sprite(self.hero, direction, self.speed);
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let (width, height) = canvas.size();
        canvas.fill_rect(
            Rect {
                x: 0,
                y: 0,
                w: width,
                h: height,
            },
            CLEAR_COLOR,
        );
        canvas.fill_rect(
            Rect {
                x: self.hero.x,
                y: self.hero.y,
                w: HERO_SIZE_PX,
                h: HERO_SIZE_PX,
            },
            HERO_COLOR,
        );
    }
}

pub(crate) fn build_scene() -> Box<dyn Scene> {
    Box::new(HeroScene::new())
}

#[cfg(test)]
mod tests;
