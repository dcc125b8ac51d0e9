use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use engine::LoopConfig;
use serde::Deserialize;
use tracing::{info, warn};

const CONFIG_PATH_ENV_VAR: &str = "BOXMOVER_CONFIG";

/// Optional overrides read from the JSON file named by `BOXMOVER_CONFIG`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct LoopConfigFile {
    pub(crate) window_title: Option<String>,
    pub(crate) window_width: Option<u32>,
    pub(crate) window_height: Option<u32>,
    pub(crate) update_interval_ms: Option<u64>,
    pub(crate) frame_skip: Option<u32>,
    pub(crate) fps_report_interval_ms: Option<u64>,
    pub(crate) idle_sleep_ms: Option<u64>,
    pub(crate) simulated_slow_frame_ms: Option<u64>,
}

impl LoopConfigFile {
    pub(crate) fn apply_to(self, mut config: LoopConfig) -> LoopConfig {
        if let Some(window_title) = self.window_title {
            config.window_title = window_title;
        }
        if let Some(window_width) = non_zero_dimension("window_width", self.window_width) {
            config.window_width = window_width;
        }
        if let Some(window_height) = non_zero_dimension("window_height", self.window_height) {
            config.window_height = window_height;
        }
        if let Some(update_interval_ms) = self.update_interval_ms {
            config.update_interval_ms = update_interval_ms;
        }
        if let Some(frame_skip) = self.frame_skip {
            config.frame_skip = frame_skip;
        }
        if let Some(fps_report_interval_ms) = self.fps_report_interval_ms {
            config.fps_report_interval_ms = fps_report_interval_ms;
        }
        if let Some(idle_sleep_ms) = self.idle_sleep_ms {
            config.idle_sleep_ms = idle_sleep_ms;
        }
        if let Some(simulated_slow_frame_ms) = self.simulated_slow_frame_ms {
            config.simulated_slow_frame_ms = simulated_slow_frame_ms;
        }
        config
    }
}

fn non_zero_dimension(field: &'static str, value: Option<u32>) -> Option<u32> {
    match value {
        Some(0) => {
            warn!(field, "zero_window_dimension_ignored");
            None
        }
        other => other,
    }
}

/// Layers the config file, if any, over `defaults`. A file that cannot be
/// read or parsed is reported and ignored.
pub(crate) fn load_config(defaults: LoopConfig) -> LoopConfig {
    let Some(path) = env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from) else {
        return defaults;
    };

    match read_config_file(&path) {
        Ok(file) => {
            info!(path = %path.display(), "config_file_loaded");
            file.apply_to(defaults)
        }
        Err(error) => {
            warn!(path = %path.display(), error = %error, "config_file_invalid");
            defaults
        }
    }
}

pub(crate) fn read_config_file(path: &Path) -> Result<LoopConfigFile, String> {
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("read config {}: {error}", path.display()))?;
    parse_config_json(&raw)
}

fn parse_config_json(raw: &str) -> Result<LoopConfigFile, String> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, LoopConfigFile>(&mut deserializer) {
        Ok(file) => Ok(file),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(format!("parse config json: {source}"))
            } else {
                Err(format!("parse config json at {path}: {source}"))
            }
        }
    }
}
