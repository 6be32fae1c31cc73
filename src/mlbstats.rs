use std::collections::HashMap;
use std::time::Duration;

use log;
use serde_json as json;

pub struct StatsApi<'a> {
    host: &'a str,
    url: String,
    params: HashMap<&'a str, String>,
}

impl<'a> StatsApi<'a> {
    pub fn schedule(host: &'a str, date: &str) -> StatsApi<'a> {
        StatsApi {
            host,
            url: "v1/schedule".to_string(),
            params: HashMap::from([
                ("sportId", "1".to_string()),
                ("date", date.to_string()),
            ]),
        }
    }

    pub fn boxscore(host: &'a str, game_id: i64) -> StatsApi<'a> {
        StatsApi {
            host,
            url: format!("v1/game/{game_id}/boxscore"),
            params: HashMap::new(),
        }
    }

    pub fn build_url(&self) -> String {
        let mut url = format!("{}/api/{}", self.host, self.url);

        for (i, (k, v)) in self.params.iter().enumerate() {
            url = format!(
                "{}{}{}={}",
                url,
                if i == 0 { "?" } else { "&" },
                k,
                v
            )
        }

        url
    }

    pub fn get(self) -> Result<reqwest::blocking::Response, String> {
        let url = self.build_url();
        log::debug!(target: "StatsApi", "GET {}", url);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| format!("Error building HTTP client: {}", err))?;
        client
            .get(&url)
            .send()
            .map_err(|err| format!("Error requesting {}: {}", url, err))
    }
}

/// Game ids scheduled for a date, in the order the API lists them.
pub fn schedule(host: &str, date: &str) -> Result<Vec<i64>, String> {
    let resp = StatsApi::schedule(host, date).get()?;
    let data: json::Value = resp
        .json()
        .map_err(|err| format!("Error decoding schedule for {}: {}", date, err))?;

    let mut game_ids: Vec<i64> = Vec::new();

    if let json::Value::Array(dates) = &data["dates"] {
        for date_info in dates {
            if let json::Value::Array(games) = &date_info["games"] {
                for game in games {
                    let id = game["gamePk"]
                        .as_i64()
                        .ok_or_else(|| format!("Schedule entry without a numeric gamePk: {}", game))?;
                    game_ids.push(id);
                }
            }
        }
    }

    Ok(game_ids)
}

/// Raw boxscore payload for a game, or [None] when the API has no data
/// for it (any non-200 status). Callers skip such games.
pub fn boxscore(host: &str, game_id: i64) -> Result<Option<json::Value>, String> {
    let resp = StatsApi::boxscore(host, game_id).get()?;
    if resp.status() != reqwest::StatusCode::OK {
        log::debug!(target: "StatsApi", "boxscore {}: HTTP {}", game_id, resp.status());
        return Ok(None);
    }
    let data: json::Value = resp
        .json()
        .map_err(|err| format!("Error decoding boxscore for game {}: {}", game_id, err))?;
    Ok(Some(data))
}
