use engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::{config, gameplay};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Boxmover Startup ===");

    let config = config::load_config(LoopConfig::default()).with_env_overrides();
    info!(
        title = config.window_title.as_str(),
        width = config.window_width,
        height = config.window_height,
        frame_skip = config.frame_skip,
        "config_resolved"
    );

    AppWiring {
        config,
        scene: gameplay::build_scene(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
