use std::collections::HashMap;

use lazy_static::lazy_static;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

use crate::{
    latest_game::{resolve_latest_game, LatestGame},
    shared::{requests::RiotApi, types::StatsError, util::parse_riot_id},
    stats::StatsTemplate,
};

pub const RIOT_ID_OPTION: &str = "riot-id";

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, StatsTemplate> = StatsTemplate::iter()
        .map(|template| (template.command_name(), template))
        .collect();
}

pub fn find_command(name: &str) -> Option<StatsTemplate> {
    COMMANDS.get(name).copied()
}

/// Slash command definitions for every registered template.
pub fn create_commands() -> Vec<CreateCommand> {
    StatsTemplate::iter()
        .map(|template| {
            CreateCommand::new(template.command_name())
                .description(template.description())
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        RIOT_ID_OPTION,
                        "Write like this: Name#Tag (you can copy from the LoL client and send directly)",
                    )
                    .required(true),
                )
        })
        .collect()
}

/// Text reply for one invocation. Never fails; errors become the reply.
#[instrument(skip(api), fields(command = template.command_name()))]
pub async fn handle_latest_game_command(
    riot_id: &str,
    template: StatsTemplate,
    api: &RiotApi,
) -> String {
    match latest_game_stats(riot_id, template, api).await {
        Ok(lines) => lines.join("\n"),
        Err(err) if err.is_input_error() => err.to_string(),
        Err(err) => {
            warn!("Command failed: {}", err);
            format!("Something went wrong! Error message: {}", err)
        }
    }
}

async fn latest_game_stats(
    riot_id: &str,
    template: StatsTemplate,
    api: &RiotApi,
) -> Result<Vec<String>, StatsError> {
    let riot_id = parse_riot_id(riot_id)?;
    info!("Looking up {}#{}", riot_id.game_name, riot_id.tag_line);

    let LatestGame {
        match_data,
        participant,
    } = resolve_latest_game(api, &riot_id.game_name, &riot_id.tag_line).await?;

    template.render(&match_data, &participant)
}
