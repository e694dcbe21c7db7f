use tracing::{info, instrument};

use crate::shared::{
    requests::RiotApi,
    types::{MatchDto, ParticipantStats, StatsError},
};

/// Only the latest match is looked at.
const MATCH_COUNT: u32 = 1;

pub struct LatestGame {
    pub match_data: MatchDto,
    pub participant: ParticipantStats,
}

/// Account -> latest match id -> match -> the queried player's record.
#[instrument(skip(api))]
pub async fn resolve_latest_game(
    api: &RiotApi,
    game_name: &str,
    tag_line: &str,
) -> Result<LatestGame, StatsError> {
    let puuid = api.request_puuid(game_name, tag_line).await?;

    let match_ids = api
        .request_match_ids(&puuid, MATCH_COUNT, false)
        .await
        .map_err(|_| StatsError::NoRecentMatches)?;
    let latest_match_id = match_ids.first().ok_or(StatsError::NoRecentMatches)?;
    info!("Latest match for {}#{} is {}", game_name, tag_line, latest_match_id);

    let match_data = api
        .request_match(latest_match_id)
        .await
        .map_err(|_| StatsError::NoRecentMatches)?;

    let participant = find_participant(&match_data, game_name)?;

    Ok(LatestGame {
        match_data,
        participant,
    })
}

/// Exact, case-sensitive match on `riotIdGameName`.
pub fn find_participant(
    match_data: &MatchDto,
    game_name: &str,
) -> Result<ParticipantStats, StatsError> {
    match_data
        .info
        .participants
        .iter()
        .find(|p| p.riot_id_game_name == game_name)
        .ok_or_else(|| StatsError::ParticipantNotFound {
            name: game_name.to_string(),
        })?
        .clone()
        .into_stats()
}
