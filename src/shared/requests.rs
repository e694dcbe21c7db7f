use super::types::{AccountDto, MatchDto, StatsError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// EUW accounts and matches are served from the `europe` regional route.
pub const EUROPE_BASE_URL: &str = "https://europe.api.riotgames.com";

const ACCOUNT_BY_RIOT_ID_PATH: &str = "/riot/account/v1/accounts/by-riot-id";
const MATCHES_PATH: &str = "/lol/match/v5/matches";

#[derive(Clone)]
pub struct RiotApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RiotApi {
    pub fn new(client: Client, api_key: &str) -> Self {
        Self::with_base_url(client, api_key, EUROPE_BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: &str, base_url: &str) -> Self {
        RiotApi {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Single authenticated GET, decoded as `T`. No retries.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await
            .map_err(|err| {
                warn!("Request to {} failed: {}", path, err);
                StatsError::Upstream {
                    path: path.to_string(),
                    status: err
                        .status()
                        .map_or("no response".to_string(), |s| s.to_string()),
                }
            })?;

        let response_status = response.status();
        if !response_status.is_success() {
            warn!("Request to {} returned {}", path, response_status);
            return Err(StatsError::Upstream {
                path: path.to_string(),
                status: response_status.to_string(),
            });
        }
        info!("Request to {} successful", path);

        response
            .json::<T>()
            .await
            .map_err(|err| StatsError::Schema(err.to_string()))
    }

    pub async fn request_puuid(&self, game_name: &str, tag_line: &str) -> Result<String, StatsError> {
        let path = format!(
            "{}/{}/{}",
            ACCOUNT_BY_RIOT_ID_PATH,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        // Unknown account, bad key and network trouble all read the same to the user.
        self.fetch_json::<AccountDto>(&path)
            .await
            .map(|account| account.puuid)
            .map_err(|_| StatsError::IdentityNotFound {
                name: game_name.to_string(),
                tag: tag_line.to_string(),
            })
    }

    /// Most recent first, as returned by match-v5.
    pub async fn request_match_ids(
        &self,
        puuid: &str,
        count: u32,
        only_ranked: bool,
    ) -> Result<Vec<String>, StatsError> {
        let mut path = format!(
            "{}/by-puuid/{}/ids?count={}",
            MATCHES_PATH,
            urlencoding::encode(puuid),
            count
        );
        if only_ranked {
            path.push_str("&type=ranked");
        }

        self.fetch_json::<Vec<String>>(&path).await
    }

    pub async fn request_match(&self, match_id: &str) -> Result<MatchDto, StatsError> {
        let path = format!("{}/{}", MATCHES_PATH, urlencoding::encode(match_id));
        self.fetch_json::<MatchDto>(&path).await
    }
}
