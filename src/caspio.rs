use std::time::Duration;

use log;
use reqwest::blocking::Client;
use serde_json as json;

use crate::config::Config;
use crate::record::GameRecord;

fn client() -> Result<Client, String> {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|err| format!("Error building HTTP client: {}", err))
}

/// Exchange the client credentials for a bearer token. [None] means the
/// service answered but granted no token; the run cannot proceed.
pub fn token(cfg: &Config) -> Result<Option<String>, String> {
    let url = format!("{}/oauth/token", cfg.caspio_domain);
    log::debug!(target: "caspio", "POST {}", url);

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", cfg.client_id.as_str()),
        ("client_secret", cfg.client_secret.as_str()),
    ];
    let resp = client()?
        .post(&url)
        .form(&params)
        .send()
        .map_err(|err| format!("Error requesting {}: {}", url, err))?;
    let body: json::Value = resp
        .json()
        .map_err(|err| format!("Error decoding token response: {}", err))?;

    Ok(body["access_token"].as_str().map(str::to_string))
}

/// Append one record to the table. Returns the service's status code and
/// decoded body verbatim; the caller decides what to do with them.
pub fn push(
    cfg: &Config,
    access_token: &str,
    record: &GameRecord,
) -> Result<(u16, json::Value), String> {
    let url = format!("{}/rest/v2/tables/{}/records", cfg.caspio_domain, cfg.table);
    log::debug!(target: "caspio", "POST {}", url);

    let resp = client()?
        .post(&url)
        .bearer_auth(access_token)
        .json(&json::json!({ "Records": [record] }))
        .send()
        .map_err(|err| format!("Error requesting {}: {}", url, err))?;

    let status = resp.status().as_u16();
    let body: json::Value = resp
        .json()
        .map_err(|err| format!("Error decoding record-create response: {}", err))?;
    Ok((status, body))
}
