use std::process::ExitCode;

use engine::run_app;
use tracing::{error, info};

use super::bootstrap::AppWiring;

pub(crate) fn run(app: AppWiring) -> ExitCode {
    match run_app(app.config, app.scene) {
        Ok(summary) => {
            let last_fps = summary.last_report.map(|report| report.fps);
            info!(
                ticks = summary.ticks,
                frames = summary.frames,
                last_fps = ?last_fps,
                "exited_cleanly"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "startup_failed");
            ExitCode::FAILURE
        }
    }
}
