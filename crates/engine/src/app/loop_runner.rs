use std::env;
use std::str::FromStr;

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::error::{EventLoopError, OsError};

use super::metrics::MetricsAccumulator;
use super::winit_platform::WinitPlatform;
use super::{format_fps_title, InputState, LoopMetricsSnapshot, Platform, PlatformEvent, Scene};

pub const FRAME_SKIP_ENV_VAR: &str = "BOXMOVER_FRAME_SKIP";
pub const SLOW_FRAME_ENV_VAR: &str = "BOXMOVER_SLOW_FRAME_MS";

pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000 / 60;
pub const DEFAULT_FPS_REPORT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub update_interval_ms: u64,
    /// Ticks to skip rendering between rendered ticks. 0 renders every tick.
    pub frame_skip: u32,
    pub fps_report_interval_ms: u64,
    pub idle_sleep_ms: u64,
    pub simulated_slow_frame_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Boxmover - Use Arrow Keys to Move".to_string(),
            window_width: 480,
            window_height: 320,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            frame_skip: 0,
            fps_report_interval_ms: DEFAULT_FPS_REPORT_INTERVAL_MS,
            idle_sleep_ms: 1,
            simulated_slow_frame_ms: 0,
        }
    }
}

impl LoopConfig {
    /// Applies `BOXMOVER_FRAME_SKIP` and `BOXMOVER_SLOW_FRAME_MS` on top of
    /// the current values. Unparseable values are logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(frame_skip) = parse_override(FRAME_SKIP_ENV_VAR, env::var(FRAME_SKIP_ENV_VAR))
        {
            self.frame_skip = frame_skip;
        }
        if let Some(slow_frame_ms) =
            parse_override(SLOW_FRAME_ENV_VAR, env::var(SLOW_FRAME_ENV_VAR))
        {
            self.simulated_slow_frame_ms = slow_frame_ms;
        }
        self
    }
}

/// Start-up failures. Once the loop is running nothing in it can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
}

pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<LoopSummary, AppError> {
    let mut platform = WinitPlatform::new(&config)?;
    info!(
        width = config.window_width,
        height = config.window_height,
        "surface_created"
    );
    Ok(run_loop(&mut platform, scene.as_mut(), &config))
}

/// Drives `scene` on `platform` until a quit event is dispatched.
pub fn run_loop<P: Platform, S: Scene + ?Sized>(
    platform: &mut P,
    scene: &mut S,
    config: &LoopConfig,
) -> LoopSummary {
    let mut input = InputState::new();
    let mut scheduler = LoopScheduler::new(config, platform.now_millis());
    info!(
        update_interval_ms = scheduler.update_interval_ms,
        frame_skip = scheduler.frame_skip,
        fps_report_interval_ms = scheduler.fps_report_interval_ms,
        idle_sleep_ms = scheduler.idle_sleep_ms,
        slow_frame_delay_ms = scheduler.slow_frame_ms,
        "loop_config"
    );

    while scheduler.run_iteration(platform, scene, &mut input) == LoopState::Running {}

    let summary = scheduler.summary();
    info!(
        iterations = summary.iterations,
        ticks = summary.ticks,
        frames = summary.frames,
        "shutdown"
    );
    summary
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// A due fixed-step tick and whether the frame-skip policy lets it render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep {
    pub render: bool,
}

/// Lifetime totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub iterations: u64,
    pub ticks: u64,
    pub frames: u64,
    /// Most recent per-second report, if the run lasted long enough for one.
    pub last_report: Option<LoopMetricsSnapshot>,
}

#[derive(Debug)]
pub struct LoopScheduler {
    update_interval_ms: u64,
    fps_report_interval_ms: u64,
    frame_skip: u32,
    idle_sleep_ms: u64,
    slow_frame_ms: u64,
    window_title: String,
    last_update_ms: u64,
    last_fps_ms: u64,
    frames_skipped: u32,
    counters: MetricsAccumulator,
    summary: LoopSummary,
    state: LoopState,
}

impl LoopScheduler {
    pub fn new(config: &LoopConfig, now_ms: u64) -> Self {
        Self {
            update_interval_ms: normalize_non_zero_ms(
                config.update_interval_ms,
                DEFAULT_UPDATE_INTERVAL_MS,
            ),
            fps_report_interval_ms: normalize_non_zero_ms(
                config.fps_report_interval_ms,
                DEFAULT_FPS_REPORT_INTERVAL_MS,
            ),
            frame_skip: config.frame_skip,
            idle_sleep_ms: config.idle_sleep_ms,
            slow_frame_ms: config.simulated_slow_frame_ms,
            window_title: config.window_title.clone(),
            last_update_ms: now_ms,
            last_fps_ms: now_ms,
            frames_skipped: 0,
            counters: MetricsAccumulator::default(),
            summary: LoopSummary::default(),
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn summary(&self) -> LoopSummary {
        self.summary
    }

    /// Frames rendered since the last FPS report.
    pub fn frame_count(&self) -> u32 {
        self.counters.frames()
    }

    /// Applies one polled event. `Stopped` is terminal.
    pub fn dispatch(&mut self, event: PlatformEvent, input: &mut InputState) -> LoopState {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        match event {
            PlatformEvent::Quit => self.state = LoopState::Stopped,
            PlatformEvent::KeyDown(key) => input.set(key, true),
            PlatformEvent::KeyUp(key) => input.set(key, false),
            PlatformEvent::Other => {}
        }
        self.state
    }

    /// Returns at most one tick per call, however many intervals elapsed.
    pub fn poll_fixed_step(&mut self, now_ms: u64) -> Option<FixedStep> {
        if self.state == LoopState::Stopped {
            return None;
        }
        if now_ms.saturating_sub(self.last_update_ms) < self.update_interval_ms {
            return None;
        }

        self.last_update_ms = now_ms;
        self.counters.record_tick();
        self.summary.ticks = self.summary.ticks.saturating_add(1);

        if self.frames_skipped >= self.frame_skip {
            self.frames_skipped = 0;
            self.counters.record_frame();
            self.summary.frames = self.summary.frames.saturating_add(1);
            Some(FixedStep { render: true })
        } else {
            self.frames_skipped = self.frames_skipped.saturating_add(1);
            self.counters.record_skip();
            Some(FixedStep { render: false })
        }
    }

    /// Returns the window's counts and resets them once the report interval
    /// has elapsed.
    pub fn poll_fps_report(&mut self, now_ms: u64) -> Option<LoopMetricsSnapshot> {
        if self.state == LoopState::Stopped {
            return None;
        }
        if now_ms.saturating_sub(self.last_fps_ms) < self.fps_report_interval_ms {
            return None;
        }

        self.last_fps_ms = now_ms;
        Some(self.counters.take_snapshot())
    }

    pub fn run_iteration<P: Platform, S: Scene + ?Sized>(
        &mut self,
        platform: &mut P,
        scene: &mut S,
        input: &mut InputState,
    ) -> LoopState {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }
        self.summary.iterations = self.summary.iterations.saturating_add(1);

        if let Some(event) = platform.poll_event() {
            if self.dispatch(event, input) == LoopState::Stopped {
                info!(reason = "quit_event", "shutdown_requested");
                return LoopState::Stopped;
            }
        }

        let now = platform.now_millis();
        if let Some(step) = self.poll_fixed_step(now) {
            scene.update(input);
            if step.render {
                if self.slow_frame_ms > 0 {
                    // Debug perturbation to emulate render load.
                    platform.sleep_millis(self.slow_frame_ms);
                }
                scene.render(&mut *platform);
                platform.present();
            } else {
                debug!(frames_skipped = self.frames_skipped, "render_skipped");
            }
        }

        if let Some(snapshot) = self.poll_fps_report(now) {
            platform.set_title(&format_fps_title(&self.window_title, snapshot.fps));
            self.summary.last_report = Some(snapshot);
            info!(
                fps = snapshot.fps,
                ticks = snapshot.ticks,
                skipped = snapshot.skipped,
                "loop_metrics"
            );
        }

        if self.idle_sleep_ms > 0 {
            platform.sleep_millis(self.idle_sleep_ms);
        }
        LoopState::Running
    }
}

fn normalize_non_zero_ms(value: u64, fallback: u64) -> u64 {
    if value == 0 {
        fallback
    } else {
        value
    }
}

fn parse_override<T: FromStr>(
    env_var: &'static str,
    raw: Result<String, env::VarError>,
) -> Option<T> {
    match raw {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(
                    env_var,
                    value = value.as_str(),
                    "invalid env override; keeping configured value"
                );
                None
            }
        },
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(
                env_var,
                error = %err,
                "unable to read env override; keeping configured value"
            );
            None
        }
    }
}
