pub mod app;

pub use app::{
    format_fps_title, run_app, run_loop, AppError, Canvas, Color, FixedStep, InputState, KeyId,
    LoopConfig, LoopMetricsSnapshot, LoopScheduler, LoopState, LoopSummary, Platform,
    PlatformEvent, Rect, Renderer, Scene, WinitPlatform, DEFAULT_FPS_REPORT_INTERVAL_MS,
    DEFAULT_UPDATE_INTERVAL_MS, FRAME_SKIP_ENV_VAR, SLOW_FRAME_ENV_VAR,
};
