//! Brick Breaker entry point
//!
//! Sets up logging, reads settings and hands control to the window loop.

use brick_breaker::{Settings, platform};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker starting...");

    let settings = Settings::load();

    if let Err(err) = platform::run(settings) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
