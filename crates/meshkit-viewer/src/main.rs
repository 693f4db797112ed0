mod app;
mod config;
mod showcase;

use meshkit_engine::logging::init_logging;
use meshkit_engine::window::Runtime;

use app::ViewerApp;
use config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    let config = ViewerConfig::default();
    init_logging(config.logging.clone());

    log::info!("keys 1-5 switch shapes, Escape quits");

    Runtime::run(config.runtime.clone(), config.gpu.clone(), ViewerApp::new(config))
}
