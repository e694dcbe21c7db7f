use std::num::NonZeroU64;

use anyhow::Context as _;
use serenity::all::*;
use shared::requests::RiotApi;
use shuttle_runtime::SecretStore;
use tracing::{error, info, warn};

mod commands;
mod latest_game;
pub mod shared;
mod stats;

struct Bot {
    api: RiotApi,
    discord_guild_id: Option<GuildId>,
}

impl Bot {
    async fn reply_unknown_command(&self, ctx: &Context, command: &CommandInteraction) {
        let builder = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("There was an error executing that command!")
                .ephemeral(true),
        );
        if let Err(err) = command.create_response(&ctx.http, builder).await {
            error!("Could not reply to {}: {}", command.data.name, err);
        }
    }
}

#[async_trait]
impl EventHandler for Bot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        let commands = commands::create_commands();
        let registered = match self.discord_guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
            None => Command::set_global_commands(&ctx.http, commands).await,
        };

        match registered {
            Ok(registered) => info!(
                "Registered commands: {:?}",
                registered.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
            ),
            Err(err) => error!("Failed to register commands: {}", err),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let Some(template) = commands::find_command(&command.data.name) else {
            warn!("Unknown command: {}", command.data.name);
            self.reply_unknown_command(&ctx, &command).await;
            return;
        };

        let builder = CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new());
        if let Err(err) = command.create_response(&ctx.http, builder).await {
            error!("Could not defer {}: {}", command.data.name, err);
            return;
        }

        let riot_id = command
            .data
            .options
            .iter()
            .find(|opt| opt.name == commands::RIOT_ID_OPTION)
            .and_then(|opt| opt.value.as_str())
            .unwrap_or_default();

        let content = commands::handle_latest_game_command(riot_id, template, &self.api).await;

        let edit_builder = EditInteractionResponse::new().content(content);
        if let Err(err) = command.edit_response(&ctx.http, edit_builder).await {
            error!("Could not reply to {}: {}", command.data.name, err);
        }
    }
}

#[shuttle_runtime::main]
async fn serenity(
    #[shuttle_runtime::Secrets] secret_store: SecretStore,
) -> shuttle_serenity::ShuttleSerenity {
    // Get the discord token set in `Secrets.toml`
    let discord_token = secret_store
        .get("DISCORD_TOKEN")
        .context("'DISCORD_TOKEN' was not found")?;

    let riot_api_key = secret_store
        .get("RIOT_API_KEY")
        .context("'RIOT_API_KEY' was not found")?;

    // Without a guild the commands are registered globally.
    let discord_guild_id = parse_guild_id(secret_store.get("DISCORD_GUILD_ID"))?;

    let client = get_client(&discord_token, discord_guild_id, &riot_api_key).await?;
    Ok(client.into())
}

/// Discord ids are never zero.
fn parse_guild_id(raw: Option<String>) -> anyhow::Result<Option<GuildId>> {
    raw.map(|id| id.trim().parse::<NonZeroU64>())
        .transpose()
        .context("'DISCORD_GUILD_ID' is not a valid id")
        .map(|id| id.map(|id| GuildId::new(id.get())))
}

pub async fn get_client(
    discord_token: &str,
    discord_guild_id: Option<GuildId>,
    riot_api_key: &str,
) -> anyhow::Result<Client> {
    let intents = GatewayIntents::GUILDS;

    Client::builder(discord_token, intents)
        .event_handler(Bot {
            api: RiotApi::new(reqwest::Client::new(), riot_api_key),
            discord_guild_id,
        })
        .await
        .context("Err creating client")
}
