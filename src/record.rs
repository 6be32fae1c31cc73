use std::fmt;

use serde::Serialize;
use serde_json as json;

/// Games are synced only after they complete, so every pushed row
/// carries this status.
pub const STATUS_FINAL: &str = "Final";

/// One row of the remote table. Field names double as the table's
/// column names when serialized.
#[derive(Debug, PartialEq, Serialize)]
pub struct GameRecord {
    pub game_id: i64,
    pub game_date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    pub venue: String,
    pub status: String,
}

/// A field the extractor needed was missing or had the wrong type.
#[derive(Debug, PartialEq)]
pub struct ExtractError {
    pub side: &'static str,
    pub field: &'static str,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing or malformed {} under {}", self.field, self.side)
    }
}

/// Map a raw boxscore payload to a [GameRecord].
///
/// The boxscore carries no venue, so the field is always empty. The
/// record is keyed by the schedule's game id, not any id inside the
/// payload.
pub fn extract(game_id: i64, date: &str, boxscore: &json::Value) -> Result<GameRecord, ExtractError> {
    let home = &boxscore["teams"]["home"];
    let away = &boxscore["teams"]["away"];

    Ok(GameRecord {
        game_id,
        game_date: date.to_string(),
        home_team: team_name(home, "teams.home")?,
        away_team: team_name(away, "teams.away")?,
        home_score: batting_runs(home, "teams.home")?,
        away_score: batting_runs(away, "teams.away")?,
        venue: String::new(),
        status: STATUS_FINAL.to_string(),
    })
}

fn team_name(side: &json::Value, side_name: &'static str) -> Result<String, ExtractError> {
    side["team"]["name"]
        .as_str()
        .map(str::to_string)
        .ok_or(ExtractError { side: side_name, field: "team.name" })
}

fn batting_runs(side: &json::Value, side_name: &'static str) -> Result<i64, ExtractError> {
    side["teamStats"]["batting"]["runs"]
        .as_i64()
        .ok_or(ExtractError { side: side_name, field: "teamStats.batting.runs" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn final_boxscore() -> json::Value {
        json!({
            "teams": {
                "home": {
                    "team": {"id": 147, "name": "New York Yankees"},
                    "teamStats": {"batting": {"runs": 5, "hits": 9}}
                },
                "away": {
                    "team": {"id": 111, "name": "Boston Red Sox"},
                    "teamStats": {"batting": {"runs": 3, "hits": 7}}
                }
            },
            "venue": "Yankee Stadium"
        })
    }

    #[test]
    fn extract_complete_payload() {
        let record = extract(745804, "2024-05-01", &final_boxscore()).unwrap();
        assert_eq!(
            record,
            GameRecord {
                game_id: 745804,
                game_date: "2024-05-01".to_string(),
                home_team: "New York Yankees".to_string(),
                away_team: "Boston Red Sox".to_string(),
                home_score: 5,
                away_score: 3,
                venue: String::new(),
                status: "Final".to_string(),
            }
        );
    }

    #[test]
    fn extract_ignores_input_venue() {
        let record = extract(745804, "2024-05-01", &final_boxscore()).unwrap();
        assert_eq!(record.venue, "");
        assert_eq!(record.status, "Final");
    }

    #[test]
    fn extract_missing_home_side() {
        let payload = json!({"teams": {"away": final_boxscore()["teams"]["away"]}});
        let err = extract(1, "2024-05-01", &payload).unwrap_err();
        assert_eq!(err.side, "teams.home");
    }

    #[test]
    fn extract_missing_away_side() {
        let payload = json!({"teams": {"home": final_boxscore()["teams"]["home"]}});
        let err = extract(1, "2024-05-01", &payload).unwrap_err();
        assert_eq!(err.side, "teams.away");
    }

    #[test]
    fn extract_runs_with_wrong_type() {
        let mut payload = final_boxscore();
        payload["teams"]["home"]["teamStats"]["batting"]["runs"] = json!("five");
        let err = extract(1, "2024-05-01", &payload).unwrap_err();
        assert_eq!(err.field, "teamStats.batting.runs");
    }

    #[test]
    fn extract_postponed_game_without_batting_totals() {
        // Postponed and suspended games come back without team batting
        // stats; the extractor reports the gap instead of panicking.
        let payload = json!({
            "teams": {
                "home": {"team": {"id": 147, "name": "New York Yankees"}},
                "away": {"team": {"id": 111, "name": "Boston Red Sox"}}
            }
        });
        let err = extract(1, "2024-05-01", &payload).unwrap_err();
        assert_eq!(err.field, "teamStats.batting.runs");
    }

    #[test]
    fn record_serializes_with_column_names() {
        let record = extract(745804, "2024-05-01", &final_boxscore()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["game_id"], 745804);
        assert_eq!(value["game_date"], "2024-05-01");
        assert_eq!(value["home_score"], 5);
        assert_eq!(value["away_score"], 3);
        assert_eq!(value["status"], "Final");
        assert_eq!(value["venue"], "");
    }
}
