use std::process;

use mlb_sync;
use mlb_sync::config::Config;
use mlb_sync::utils;

fn main() {
    let result = Config::get().and_then(|cfg| {
        utils::init_log(cfg.verbose);
        mlb_sync::run(cfg)
    });
    if let Err(msg) = result {
        eprintln!("[FATAL] {}", msg);
        process::exit(1);
    }
}
