use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loosely-structured scraped record: an insertion-ordered mapping from
/// column name to scalar, null, or one-level nested object.
///
/// Column headers are derived by walking this map in insertion order, so
/// the order in which the scraper inserted keys is the column order of the
/// output. Lists of records are expected to share the first record's keys;
/// this is a caller contract and is not validated.
pub type Record = Map<String, Value>;

/// One player's line in a match: display name plus an ordered stat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLine {
    pub name: String,
    pub stats: Map<String, Value>,
}

/// One scoring event from the point-by-point feed of a match.
///
/// An incident is blank for the side that did not act on the play.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEvent {
    pub time: String,
    pub score: String,
    #[serde(default)]
    pub home_incident: String,
    #[serde(default)]
    pub away_incident: String,
}

/// One row of a team's recent-match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: String,
    pub event: String,
    pub home_team: String,
    pub away_team: String,
    pub result: String,
}

/// Head-to-head block of a match page: three fixed sections of history
/// rows. A section the scraper found empty deserializes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    #[serde(default)]
    pub home_last_matches: Vec<HistoryEntry>,
    #[serde(default)]
    pub away_last_matches: Vec<HistoryEntry>,
    #[serde(default)]
    pub direct_matches: Vec<HistoryEntry>,
}

/// A single listed player of a lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub number: String,
    pub name: String,
    pub position: String,
}

/// Home and away rosters of one match. A side the scraper could not
/// extract deserializes as an empty roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lineups {
    #[serde(default)]
    pub home: Vec<Player>,
    #[serde(default)]
    pub away: Vec<Player>,
}
