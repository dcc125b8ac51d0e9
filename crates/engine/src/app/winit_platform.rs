use std::collections::VecDeque;
use std::fmt::Display;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::platform::scancode::PhysicalKeyExtScancode;
use winit::window::{WindowBuilder, WindowId};

use super::rendering::Renderer;
use super::{AppError, Canvas, Color, KeyId, LoopConfig, Platform, PlatformEvent, Rect};

/// Desktop platform: a winit window with a pixels framebuffer, polled
/// without blocking through `pump_events`.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    window_id: WindowId,
    renderer: Renderer,
    pending: VecDeque<PlatformEvent>,
    origin: Instant,
}

impl WinitPlatform {
    pub fn new(config: &LoopConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.window_title.clone())
                .with_inner_size(LogicalSize::new(
                    config.window_width as f64,
                    config.window_height as f64,
                ))
                .build(&event_loop)
                .map_err(AppError::CreateWindow)?,
        );
        let window_id = window.id();
        let renderer = Renderer::new(window, config.window_width, config.window_height)
            .map_err(AppError::CreateRenderer)?;

        event_loop.set_control_flow(ControlFlow::Poll);

        Ok(Self {
            event_loop,
            window_id,
            renderer,
            pending: VecDeque::new(),
            origin: Instant::now(),
        })
    }

    fn pump(&mut self) {
        let window_id = self.window_id;
        let pending = &mut self.pending;
        let renderer = &mut self.renderer;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _window_target| {
                let Event::WindowEvent {
                    window_id: event_window,
                    event,
                } = event
                else {
                    return;
                };
                if event_window != window_id {
                    return;
                }

                let routed = route_window_event(&event, |width, height| {
                    renderer.resize_surface(width, height)
                });
                if let Some(translated) = routed {
                    pending.push_back(translated);
                }
            });

        if let PumpStatus::Exit(code) = status {
            info!(code, "event_loop_exited");
            self.pending.push_back(PlatformEvent::Quit);
        }
    }
}

impl Canvas for WinitPlatform {
    fn size(&self) -> (u32, u32) {
        self.renderer.size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.renderer.fill_rect(rect, color);
    }
}

impl Platform for WinitPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        if self.pending.is_empty() {
            self.pump();
        }
        self.pending.pop_front()
    }

    fn present(&mut self) {
        if let Err(error) = self.renderer.present() {
            warn!(error = %error, "renderer_present_failed");
            self.pending.push_back(PlatformEvent::Quit);
        }
    }

    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn set_title(&mut self, text: &str) {
        self.renderer.set_title(text);
    }

    fn sleep_millis(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}

/// Resizes the surface on `Resized`, then translates. A failed resize keeps
/// the old surface size and the loop running.
fn route_window_event<E: Display>(
    event: &WindowEvent,
    resize: impl FnOnce(u32, u32) -> Result<(), E>,
) -> Option<PlatformEvent> {
    if let WindowEvent::Resized(size) = event {
        if let Err(error) = resize(size.width, size.height) {
            warn!(error = %error, "renderer_resize_failed");
        }
    }
    translate_window_event(event)
}

fn translate_window_event(event: &WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::CloseRequested => Some(PlatformEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => {
            Some(translate_key(event.physical_key, event.state))
        }
        WindowEvent::RedrawRequested => None,
        _ => Some(PlatformEvent::Other),
    }
}

fn translate_key(key: PhysicalKey, state: ElementState) -> PlatformEvent {
    if key == PhysicalKey::Code(KeyCode::Escape) && state == ElementState::Pressed {
        return PlatformEvent::Quit;
    }
    match (key_id_from_physical(key), state) {
        (Some(key_id), ElementState::Pressed) => PlatformEvent::KeyDown(key_id),
        (Some(key_id), ElementState::Released) => PlatformEvent::KeyUp(key_id),
        (None, _) => PlatformEvent::Other,
    }
}

fn key_id_from_physical(key: PhysicalKey) -> Option<KeyId> {
    match key {
        PhysicalKey::Code(KeyCode::ArrowLeft) => Some(KeyId::Left),
        PhysicalKey::Code(KeyCode::ArrowRight) => Some(KeyId::Right),
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(KeyId::Up),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(KeyId::Down),
        other => other.to_scancode().map(KeyId::Scancode),
    }
}
