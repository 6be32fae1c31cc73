use std::env;

use chrono;
use chrono::NaiveDate;
use clap::Parser;

pub const DEFAULT_STATS_HOST: &str = "https://statsapi.mlb.com";
pub const DEFAULT_CASPIO_DOMAIN: &str = "https://c1.caspio.com";

pub struct Config {
    pub date: String,
    pub verbose: bool,
    pub delay_secs: u64,
    pub stats_host: String,
    pub caspio_domain: String,
    pub client_id: String,
    pub client_secret: String,
    pub table: String,
}

impl Config {
    pub fn get() -> Result<Config, String> {
        dotenvy::dotenv().ok();
        Cli::parse().to_config()
    }
}

/// Stats API host, overridable for development and tests.
pub fn stats_host() -> String {
    env_or("MLB_STATS_HOST", DEFAULT_STATS_HOST)
}

#[derive(Debug, Parser)]
#[command(name = "mlb-sync")]
#[command(version = "0.1.0")]
#[command(about = "Sync daily MLB game results to a Caspio table!", long_about = None)]
struct Cli {
    /// Sync games for this date (Default: today)
    #[arg(value_name = "YYYY-MM-DD")]
    date: Option<String>,
    /// Seconds to sleep between games
    #[arg(long, value_name = "SECONDS", default_value_t = 1)]
    delay: u64,
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date(datestr: &str) -> Result<String, String> {
    match NaiveDate::parse_from_str(datestr, "%F") {
        Ok(v) => Ok(v.to_string()),
        Err(_) => Err(format!("Invalid date: {}", datestr)),
    }
}

fn require_env(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Missing environment variable: {}", name))
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Cli {
    fn to_config(self) -> Result<Config, String> {
        let date = match self.date {
            Some(s) => parse_date(&s)?,
            None => chrono::offset::Local::now().format("%F").to_string(),
        };
        Ok(Config {
            date,
            verbose: self.verbose,
            delay_secs: self.delay,
            stats_host: stats_host(),
            caspio_domain: env_or("CASPIO_DOMAIN", DEFAULT_CASPIO_DOMAIN),
            client_id: require_env("CASPIO_CLIENT_ID")?,
            client_secret: require_env("CASPIO_CLIENT_SECRET")?,
            table: require_env("CASPIO_TABLE_NAME")?,
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn test(stats_host: &str, caspio_domain: &str) -> Config {
        Config {
            date: "2024-05-01".to_string(),
            verbose: false,
            delay_secs: 0,
            stats_host: stats_host.to_string(),
            caspio_domain: caspio_domain.to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            table: "Games".to_string(),
        }
    }
}
