mod app;
mod config;
mod console;
mod effects;
mod logging;
mod persistence;

use finder_logging::finder_info;

pub fn run() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env()?;
    logging::initialize(config.log_destination, config.log_level, &config.log_path());
    finder_info!(
        "Starting addon finder against {} (order {:?})",
        config.settings.base_url,
        config.search.response_order
    );
    app::run_app(config)
}
