use std::env;
use std::error::Error;

use chrono::NaiveDate;

use mlb_sync::config;
use mlb_sync::mlbstats;
use mlb_sync::utils;

fn get_datestr() -> Result<String, Box<dyn Error>> {
    let args: Vec<_> = env::args().collect();
    let datestr = if args.len() >= 2 {
        NaiveDate::parse_from_str(&args[1], "%F")?
            .format("%F")
            .to_string()
    } else {
        chrono::offset::Local::now().format("%F").to_string()
    };
    Ok(datestr)
}

fn main() -> Result<(), Box<dyn Error>> {
    utils::init_log(true);
    let datestr = get_datestr()?;
    let sched = mlbstats::schedule(&config::stats_host(), &datestr)?;
    println!("{:#?}", sched);
    Ok(())
}
