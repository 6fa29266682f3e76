// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

mod swrv;

use rbtcs::{bot, config::Config, error};
use std::{
    env,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Gets the config path from `swrv <path>` or `swrv --config <path>`.
fn config_path(args: &[String]) -> Option<&str> {
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => return iter.next().map(String::as_str),
            a if !a.starts_with('-') => return Some(a),
            _ => (),
        }
    }

    None
}

fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let config = match config_path(&args) {
        Some(path) => {
            log::info!("using config: {}", path);
            Config::from_file(path)?
        }
        None => {
            log::info!("no config given, using defaults");
            Config::default()
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);

    ctrlc::set_handler(move || {
        log::info!("received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| error::Error::Signal(e.to_string()))?;

    let period = config.runner.period();
    bot::BotRunner::new(swrv::Swrv::new(&config)?, period, running)?.start()
}
