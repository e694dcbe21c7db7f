use strum::{EnumIter, IntoStaticStr};

use crate::shared::{
    types::{require, MatchDto, ParticipantStats, StatsError},
    util::{cs_per_minute, format_duration, format_kda, format_percent, possessive},
};

/// Anything below this KDA gets called out.
const KDA_TO_NOT_BE_AN_INTER: f64 = 1.0;

/// (player, champion, shown as). Cosmetic only.
static CHAMPION_NAME_OVERRIDES: [(&str, &str, &str); 1] = [("Chaos", "Teemo", "Teemo (Satan)")];

/// Which set of lines a command prints. The string form is the slash command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum StatsTemplate {
    #[strum(serialize = "latest-game-stats")]
    Full,
    #[strum(serialize = "latest-game-lane-stats")]
    Lane,
    #[strum(serialize = "latest-game-ability-stats")]
    Abilities,
}

impl StatsTemplate {
    pub fn command_name(&self) -> &'static str {
        self.into()
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatsTemplate::Full => "Shows some stats from the latest game",
            StatsTemplate::Lane => "Shows stats about the laning phase from the latest game",
            StatsTemplate::Abilities => {
                "Shows how often each ability was used in the latest game"
            }
        }
    }

    /// Lines of the reply. Empty strings are blank separator lines.
    pub fn render(
        &self,
        match_data: &MatchDto,
        player: &ParticipantStats,
    ) -> Result<Vec<String>, StatsError> {
        let duration = match_data.info.game_duration;
        let mut lines = preamble(player, duration);

        match self {
            StatsTemplate::Full => full_stats(&mut lines, player, duration)?,
            StatsTemplate::Lane => lane_stats(&mut lines, player)?,
            StatsTemplate::Abilities => ability_stats(&mut lines, player)?,
        }

        Ok(lines)
    }
}

fn champion_display_name<'a>(player_name: &str, champion: &'a str) -> &'a str {
    CHAMPION_NAME_OVERRIDES
        .iter()
        .find(|&&(name, champ, _)| name == player_name && champ == champion)
        .map_or(champion, |&(_, _, shown)| shown)
}

fn preamble(player: &ParticipantStats, duration: u64) -> Vec<String> {
    let name = &player.riot_id_game_name;
    let mut lines = vec![
        format!("**Stats for {} latest game:**", possessive(name)),
        String::new(),
        format!(
            "**Champ: **{}",
            champion_display_name(name, &player.champion_name)
        ),
        format!("**Duration: **{}", format_duration(duration)),
    ];
    lines.push(if player.win {
        "**Victory!**".to_string()
    } else {
        "**Defeat! :( (jg diff)**".to_string()
    });
    lines.push(String::new());
    lines
}

fn full_stats(
    lines: &mut Vec<String>,
    player: &ParticipantStats,
    duration: u64,
) -> Result<(), StatsError> {
    let kda = require(player.kda, "kda")?;
    let kill_participation = require(player.kill_participation, "killParticipation")?;

    lines.push(format!("**Kills: **{}", player.kills));
    lines.push(format!("**Deaths: **{}", player.deaths));
    lines.push(format!("**Assists: **{}", player.assists));
    let mut kda_line = format!("**KDA: **{}", format_kda(kda));
    if kda < KDA_TO_NOT_BE_AN_INTER {
        kda_line.push_str("** CERTIFIED INTER!**");
    }
    lines.push(kda_line);
    lines.push(format!(
        "**Kill participation: **{}",
        format_percent(kill_participation)
    ));
    lines.push(String::new());

    let cs = player.total_minions_killed + player.neutral_minions_killed;
    lines.push(format!(
        "**CS: **{} ({:.1})",
        cs,
        cs_per_minute(cs, duration)
    ));
    lines.push(format!("**Vision score: **{}", player.vision_score));
    lines.push(String::new());

    lines.push(format!(
        "**Damage to players: **{}",
        player.total_damage_dealt_to_champions
    ));
    lines.push(format!(
        "**Damage to turrets: **{}",
        player.damage_dealt_to_turrets
    ));
    lines.push(format!("**Damage taken: **{}", player.total_damage_taken));
    lines.push(String::new());

    if require(player.solo_kills, "soloKills")? > 0 {
        lines.push("**Any SOLOBOLO?** Yes!".to_string());
    } else {
        lines.push("**Any SOLOBOLO?** No :(".to_string());
    }
    lines.push(format!(
        "**Objective steals: **{}",
        require(player.epic_monster_steals, "epicMonsterSteals")?
    ));
    lines.push(format!(
        "**Skillshots hit: **{}",
        require(player.skillshots_hit, "skillshotsHit")?
    ));
    lines.push(format!(
        "**Dodged skillshots: **{}",
        require(player.skillshots_dodged, "skillshotsDodged")?
    ));
    lines.push(format!(
        "**\"Enemy missing\"-pings: **{}",
        require(player.enemy_missing_pings, "enemyMissingPings")?
    ));
    Ok(())
}

fn lane_stats(lines: &mut Vec<String>, player: &ParticipantStats) -> Result<(), StatsError> {
    lines.push(format!(
        "**CS at 10 minutes: **{}",
        require(
            player.lane_minions_first_10_minutes,
            "laneMinionsFirst10Minutes"
        )?
    ));
    lines.push(format!(
        "**Max CS lead over lane opponent: **{}",
        require(
            player.max_cs_advantage_on_lane_opponent,
            "maxCsAdvantageOnLaneOpponent"
        )?
        .round() as i64
    ));
    lines.push(format!(
        "**Max level lead over lane opponent: **{}",
        require(
            player.max_level_lead_lane_opponent,
            "maxLevelLeadLaneOpponent"
        )?
    ));
    Ok(())
}

fn ability_stats(lines: &mut Vec<String>, player: &ParticipantStats) -> Result<(), StatsError> {
    let casts = [
        ("Q", player.spell1_casts, "spell1Casts"),
        ("W", player.spell2_casts, "spell2Casts"),
        ("E", player.spell3_casts, "spell3Casts"),
        ("R", player.spell4_casts, "spell4Casts"),
    ];
    for (key, count, field) in casts {
        lines.push(format!("**{} casts: **{}", key, require(count, field)?));
    }
    lines.push(format!(
        "**Skillshots hit: **{}",
        require(player.skillshots_hit, "skillshotsHit")?
    ));
    Ok(())
}
