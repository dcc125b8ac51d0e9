mod input;
mod loop_runner;
mod metrics;
mod platform;
mod rendering;
mod scene;
mod winit_platform;

pub use input::{InputState, KeyId};
pub use loop_runner::{
    run_app, run_loop, AppError, FixedStep, LoopConfig, LoopScheduler, LoopState, LoopSummary,
    DEFAULT_FPS_REPORT_INTERVAL_MS, DEFAULT_UPDATE_INTERVAL_MS, FRAME_SKIP_ENV_VAR,
    SLOW_FRAME_ENV_VAR,
};
pub use metrics::{format_fps_title, LoopMetricsSnapshot};
pub use platform::{Canvas, Color, Platform, PlatformEvent, Rect};
pub use rendering::Renderer;
pub use scene::Scene;
pub use winit_platform::WinitPlatform;
