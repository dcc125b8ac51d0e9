use std::collections::VecDeque;

use engine::{run_loop, LoopConfig, Platform, PlatformEvent};

use super::*;

fn input_with(keys: &[KeyId]) -> InputState {
    let mut input = InputState::new();
    for key in keys {
        input.set(*key, true);
    }
    input
}

#[derive(Default)]
struct RecordingCanvas {
    fills: Vec<(Rect, Color)>,
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (480, 320)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }
}

/// Fake clock advanced by sleeps; events become visible at their timestamp.
#[derive(Default)]
struct ScriptedPlatform {
    now: u64,
    events: VecDeque<(u64, PlatformEvent)>,
    canvas: RecordingCanvas,
    presents: u32,
}

impl Canvas for ScriptedPlatform {
    fn size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        match self.events.front() {
            Some((at_ms, _)) if *at_ms <= self.now => {
                self.events.pop_front().map(|(_, event)| event)
            }
            _ => None,
        }
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn now_millis(&self) -> u64 {
        self.now
    }

    fn set_title(&mut self, _text: &str) {}

    fn sleep_millis(&mut self, millis: u64) {
        self.now += millis;
    }
}

#[test]
fn no_keys_held_leaves_hero_in_place() {
    let mut scene = HeroScene::new();
    let input = InputState::new();
    for _ in 0..5 {
        scene.update(&input);
    }
    assert_eq!(scene.hero(), Sprite { x: 0, y: 0 });
}

#[test]
fn left_wins_over_right() {
    let mut scene = HeroScene::new();
    scene.update(&input_with(&[KeyId::Right, KeyId::Left]));
    assert_eq!(scene.hero(), Sprite { x: -2, y: 0 });
}

#[test]
fn priority_order_is_left_right_up_down() {
    assert_eq!(
        held_direction(&input_with(&[KeyId::Down, KeyId::Up])),
        Some(Direction::Up)
    );
    assert_eq!(
        held_direction(&input_with(&[KeyId::Down, KeyId::Right])),
        Some(Direction::Right)
    );
    assert_eq!(
        held_direction(&input_with(&[KeyId::Up, KeyId::Left, KeyId::Down])),
        Some(Direction::Left)
    );
    assert_eq!(held_direction(&input_with(&[KeyId::Down])), Some(Direction::Down));
    assert_eq!(held_direction(&input_with(&[KeyId::Scancode(30)])), None);
}

#[test]
fn every_key_combination_moves_exactly_one_axis_by_speed() {
    let keys = [KeyId::Left, KeyId::Right, KeyId::Up, KeyId::Down];
    for mask in 0u8..16 {
        let held: Vec<KeyId> = keys
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, key)| *key)
            .collect();
        let mut scene = HeroScene::new();
        scene.update(&input_with(&held));
        let hero = scene.hero();

        let expected = match held.first() {
            Some(KeyId::Left) => Sprite { x: -2, y: 0 },
            Some(KeyId::Right) => Sprite { x: 2, y: 0 },
            Some(KeyId::Up) => Sprite { x: 0, y: -2 },
            Some(KeyId::Down) => Sprite { x: 0, y: 2 },
            _ => Sprite { x: 0, y: 0 },
        };
        assert_eq!(hero, expected, "held: {held:?}");
    }
}

#[test]
fn holding_up_for_ten_ticks_moves_twenty_units() {
    let mut scene = HeroScene::new();
    let input = input_with(&[KeyId::Up]);
    for _ in 0..10 {
        scene.update(&input);
    }
    assert_eq!(scene.hero(), Sprite { x: 0, y: -20 });
}

#[test]
fn released_key_stops_movement() {
    let mut scene = HeroScene::new();
    let mut input = input_with(&[KeyId::Right]);
    scene.update(&input);
    input.set(KeyId::Right, false);
    scene.update(&input);

    assert_eq!(scene.hero(), Sprite { x: 2, y: 0 });
}

#[test]
fn step_sprite_moves_along_screen_axes() {
    let origin = Sprite { x: 10, y: 10 };
    assert_eq!(step_sprite(origin, Direction::Left, 3), Sprite { x: 7, y: 10 });
    assert_eq!(step_sprite(origin, Direction::Right, 3), Sprite { x: 13, y: 10 });
    assert_eq!(step_sprite(origin, Direction::Up, 3), Sprite { x: 10, y: 7 });
    assert_eq!(step_sprite(origin, Direction::Down, 3), Sprite { x: 10, y: 13 });
}

#[test]
fn render_clears_then_draws_hero() {
    let mut scene = HeroScene::new();
    scene.update(&input_with(&[KeyId::Down]));
    let mut canvas = RecordingCanvas::default();

    scene.render(&mut canvas);

    assert_eq!(
        canvas.fills,
        vec![
            (
                Rect {
                    x: 0,
                    y: 0,
                    w: 480,
                    h: 320,
                },
                Color::WHITE,
            ),
            (
                Rect {
                    x: 0,
                    y: 2,
                    w: 20,
                    h: 20,
                },
                Color::RED,
            ),
        ]
    );
}

#[test]
fn loop_moves_hero_while_up_is_held() {
    let mut platform = ScriptedPlatform::default();
    platform
        .events
        .push_back((0, PlatformEvent::KeyDown(KeyId::Up)));
    platform.events.push_back((170, PlatformEvent::Quit));
    let mut scene = HeroScene::new();

    let summary = run_loop(&mut platform, &mut scene, &LoopConfig::default());

    // Due ticks at 16, 32, ..., 160 before the quit at 170.
    assert_eq!(summary.ticks, 10);
    assert_eq!(scene.hero(), Sprite { x: 0, y: -20 });
    assert_eq!(platform.presents, 10);
    assert_eq!(
        platform.canvas.fills.last(),
        Some(&(
            Rect {
                x: 0,
                y: -20,
                w: 20,
                h: 20,
            },
            Color::RED,
        ))
    );
}

#[test]
fn build_scene_returns_boxed_hero_scene() {
    let mut scene = build_scene();
    scene.update(&input_with(&[KeyId::Left]));
    let mut canvas = RecordingCanvas::default();
    scene.render(&mut canvas);

    assert_eq!(canvas.fills[1].0.x, -2);
}
