pub mod config;
pub mod mlbstats;
pub mod utils;
mod caspio;
mod record;

use std::thread;
use std::time::Duration;

use crate::config::Config;

/// One full sync run: authenticate, enumerate the date's games, then
/// fetch/extract/push each game in order. Per-game problems are logged
/// and skipped; everything else aborts the run.
pub fn run(cfg: Config) -> Result<(), String> {
    if cfg.verbose {
        eprintln!("[VERBOSE] cfg.date={:?}", cfg.date);
        eprintln!("[VERBOSE] cfg.table={:?}", cfg.table);
        eprintln!("[VERBOSE] cfg.delay_secs={:?}", cfg.delay_secs);
    }

    let token = caspio::token(&cfg)?
        .ok_or_else(|| "Failed to authenticate with Caspio.".to_string())?;

    let game_ids = mlbstats::schedule(&cfg.stats_host, &cfg.date)?;
    println!("Found {} games.", game_ids.len());

    for (i, game_id) in game_ids.iter().enumerate() {
        if i > 0 {
            // Politeness toward the public API; sleeps even if the
            // previous iteration was slow.
            thread::sleep(Duration::from_secs(cfg.delay_secs));
        }
        sync_game(&cfg, &token, *game_id)?;
    }

    Ok(())
}

fn sync_game(cfg: &Config, token: &str, game_id: i64) -> Result<(), String> {
    let payload = match mlbstats::boxscore(&cfg.stats_host, game_id)? {
        Some(payload) => payload,
        None => {
            println!("Skipping game {}: no boxscore data.", game_id);
            return Ok(());
        }
    };

    let record = match record::extract(game_id, &cfg.date, &payload) {
        Ok(record) => record,
        Err(err) => {
            println!("Skipping game {} due to parse error: {}", game_id, err);
            return Ok(());
        }
    };

    let (status, body) = caspio::push(cfg, token, &record)?;
    println!("Pushed game {}: Status {} - {}", game_id, status, body);
    Ok(())
}
