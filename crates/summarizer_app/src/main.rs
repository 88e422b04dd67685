mod config;
mod platform;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env().context("invalid configuration")?;
    platform::logging::initialize(
        platform::logging::LogDestination::File(config.log_file.clone()),
        config.log_level,
    );
    platform::run_app(config)
}
