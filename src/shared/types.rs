use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Deserialize, Debug)]
pub struct AccountDto {
    pub puuid: String,
}

/// Everything that can go wrong between reading the `riot-id` option and
/// rendering the reply.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("No name detected!")]
    MissingName,
    #[error("No tag detected!")]
    MissingTag,
    #[error("No Riot account with the name \"{name}\" and the tag \"{tag}\" found on EUW!")]
    IdentityNotFound { name: String, tag: String },
    #[error("No recent matches found!")]
    NoRecentMatches,
    #[error("No player named \"{name}\" was found in the latest match!")]
    ParticipantNotFound { name: String },
    #[error("Request to {path} failed ({status})")]
    Upstream { path: String, status: String },
    #[error("Unexpected match data: {0}")]
    Schema(String),
}

impl StatsError {
    /// Input errors are replied as-is instead of wrapped in the generic failure text.
    pub fn is_input_error(&self) -> bool {
        matches!(self, StatsError::MissingName | StatsError::MissingTag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: InfoDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub game_duration: u64,
    pub participants: Vec<ParticipantDto>,
}

/// A participant as sent by match-v5. Only the name is typed here, the rest
/// stays raw until the participant we care about has been picked out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ParticipantDto {
    /// Participant fields with the `challenges` object merged on top.
    /// Challenge values overwrite base values sharing a key.
    pub fn merged_fields(&self) -> Map<String, Value> {
        let mut merged = self.fields.clone();
        merged.insert(
            "riotIdGameName".to_string(),
            Value::String(self.riot_id_game_name.clone()),
        );
        if let Some(Value::Object(challenges)) = merged.remove("challenges") {
            merged.extend(challenges);
        }
        merged
    }

    pub fn into_stats(self) -> Result<ParticipantStats, StatsError> {
        serde_json::from_value(Value::Object(self.merged_fields()))
            .map_err(|err| StatsError::Schema(err.to_string()))
    }
}

/// Flattened participant record (base stats + challenges).
///
/// Fields shared by every template are required. The rest depend on game mode
/// and are checked by the template that prints them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub riot_id_game_name: String,
    pub champion_name: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub vision_score: u32,
    pub total_damage_dealt_to_champions: u64,
    pub damage_dealt_to_turrets: u64,
    pub total_damage_taken: u64,
    pub enemy_missing_pings: Option<u32>,
    pub spell1_casts: Option<u32>,
    pub spell2_casts: Option<u32>,
    pub spell3_casts: Option<u32>,
    pub spell4_casts: Option<u32>,

    // challenges
    pub kda: Option<f64>,
    pub kill_participation: Option<f64>,
    pub solo_kills: Option<u32>,
    pub epic_monster_steals: Option<u32>,
    pub skillshots_hit: Option<u32>,
    pub skillshots_dodged: Option<u32>,
    #[serde(rename = "laneMinionsFirst10Minutes")]
    pub lane_minions_first_10_minutes: Option<u32>,
    pub max_cs_advantage_on_lane_opponent: Option<f64>,
    pub max_level_lead_lane_opponent: Option<i32>,
}

/// Unwraps a field only some templates need.
pub fn require<T: Copy>(value: Option<T>, field: &str) -> Result<T, StatsError> {
    value.ok_or_else(|| StatsError::Schema(format!("missing field `{}`", field)))
}
