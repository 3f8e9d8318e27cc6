use std::time::Duration;

use serde_json::Value;

use crate::api::endpoints::{self, BASE_URL};
use crate::config::Config;
use crate::error::ApiError;

const USER_AGENT: &str = "league_client/0.1.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Region used when the caller does not pick one.
pub const DEFAULT_LOCATION: &str = "na";
/// Queue filter Riot applies to ranked lookups unless told otherwise.
pub const DEFAULT_MATCH_TYPE: &str = "RANKED_SOLO_5x5";
/// How many entries `get_matches` asks for by default.
pub const DEFAULT_MATCH_COUNT: u32 = 5;
/// Scope of static champion data returned by `get_champion` by default.
pub const DEFAULT_CHAMP_DATA: &str = "all";

/// A reusable connection to the Riot API.
///
/// Holds the API key and the default region for a sequence of calls; the key
/// is attached as an `api_key` query parameter to every request made through
/// the session. The session is `Send + Sync`: the underlying agent is
/// internally synchronized and each call owns its own request state, so one
/// session can be shared across threads.
#[derive(Clone)]
pub struct RiotSession {
    agent: ureq::Agent,
    api_key: String,
    location: String,
    base: String,
}

impl RiotSession {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_location(api_key, DEFAULT_LOCATION)
    }

    pub fn with_location(api_key: impl Into<String>, location: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(DEFAULT_TIMEOUT).build();

        RiotSession {
            agent,
            api_key: api_key.into(),
            location: location.into(),
            base: BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self::with_location(config.api_key, config.location)
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::from_config(Config::from_env()?))
    }

    /// Replaces the overall per-request timeout (10 seconds by default).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::AgentBuilder::new().timeout(timeout).build();
        self
    }

    /// Points the session at a different host prefix, e.g. a test server.
    /// The prefix must end with `/` and may itself contain `{location}`.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Builds and sends one GET request for a named operation.
    ///
    /// `formats` supplies the values for the URL template's placeholders;
    /// `location` is filled in from the session default unless present.
    /// `parameters` are sent as query parameters, followed by the session's
    /// `api_key` (which callers cannot override). The parsed JSON body is
    /// returned as-is; transport errors and undecodable bodies propagate.
    ///
    /// The named `get_*` methods cover the known operations; this is the
    /// escape hatch for anything they do not.
    pub fn request(
        &self,
        operation: &str,
        formats: &[(&str, &str)],
        parameters: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let template = endpoints::url_template(operation)
            .ok_or_else(|| ApiError::UnknownOperation(operation.to_string()))?;

        let mut formats = formats.to_vec();
        if !formats.iter().any(|(name, _)| *name == "location") {
            formats.push(("location", self.location.as_str()));
        }

        let url = endpoints::fill(operation, &format!("{}{}", self.base, template), &formats)?;

        tracing::debug!(operation, url = url.as_str(), "GET");

        let mut request = self.agent.get(&url).set("User-Agent", USER_AGENT);
        for (name, value) in parameters {
            request = request.query(name, value);
        }
        request = request.query("api_key", &self.api_key);

        let response = request.call().map_err(|e| ApiError::Http(e.to_string()))?;

        response.into_json().map_err(|e| ApiError::Json(e.to_string()))
    }

    /// Currently featured games, or an empty list when there are none.
    pub fn get_featured(&self) -> Result<Vec<Value>, ApiError> {
        let body = self.request("featured", &[], &[])?;
        Ok(unwrap_list(body, "gameList"))
    }

    /// Ranked match history of a player, oldest endpoint variant.
    ///
    /// `matches` and `match_type` fall back to [`DEFAULT_MATCH_COUNT`] and
    /// [`DEFAULT_MATCH_TYPE`].
    #[deprecated(note = "Riot is retiring the matchhistory endpoint; use `get_match_list`")]
    pub fn get_matches(
        &self,
        player: u64,
        matches: Option<u32>,
        match_type: Option<&str>,
    ) -> Result<Vec<Value>, ApiError> {
        tracing::warn!("get_matches calls a URL Riot is deprecating; prefer get_match_list");

        let player = player.to_string();
        let end_index = matches.unwrap_or(DEFAULT_MATCH_COUNT).to_string();
        let queue = match_type.unwrap_or(DEFAULT_MATCH_TYPE);

        let body = self.request(
            "matches",
            &[("player", &player)],
            &[("rankedQueues", queue), ("endIndex", &end_index)],
        )?;
        Ok(unwrap_list(body, "matches"))
    }

    /// Full data for one match.
    pub fn get_match(&self, match_id: u64) -> Result<Value, ApiError> {
        let match_id = match_id.to_string();
        self.request("match", &[("match", &match_id)], &[])
    }

    /// Summoner records for a list of names, looked up in one call.
    // TODO: percent-encode the joined names; non-ASCII summoner names
    // currently land in the URL raw.
    pub fn get_ids(&self, players: &[&str]) -> Result<Value, ApiError> {
        let players = players.join(",");
        self.request("ids", &[("players", &players)], &[])
    }

    /// Ranked statistics for one player.
    pub fn get_stats(&self, player: u64) -> Result<Value, ApiError> {
        let player = player.to_string();
        self.request("stats", &[("player", &player)], &[])
    }

    /// Match list of a player, or an empty list when there are no matches.
    ///
    /// `match_type` falls back to [`DEFAULT_MATCH_TYPE`].
    pub fn get_match_list(
        &self,
        player: u64,
        match_type: Option<&str>,
    ) -> Result<Vec<Value>, ApiError> {
        let player = player.to_string();
        let queue = match_type.unwrap_or(DEFAULT_MATCH_TYPE);

        let body = self.request(
            "match_list",
            &[("player", &player)],
            &[("rankedQueues", queue)],
        )?;
        Ok(unwrap_list(body, "matches"))
    }

    /// Static data for one champion, scoped by `champ_data`
    /// ([`DEFAULT_CHAMP_DATA`] unless given).
    pub fn get_champion(
        &self,
        champion: u64,
        champ_data: Option<&str>,
    ) -> Result<Value, ApiError> {
        let champion = champion.to_string();
        self.request(
            "champion",
            &[("champion", &champion)],
            &[("champData", champ_data.unwrap_or(DEFAULT_CHAMP_DATA))],
        )
    }
}

// Upstream leaves the field out entirely when there is nothing to report, so
// an absent (or non-array) field means "no data", not an error.
fn unwrap_list(mut body: Value, key: &str) -> Vec<Value> {
    match body.get_mut(key).map(Value::take) {
        Some(Value::Array(list)) => list,
        _ => Vec::new(),
    }
}
