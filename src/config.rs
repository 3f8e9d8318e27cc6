use crate::api::client::DEFAULT_LOCATION;
use crate::error::ApiError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub location: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            ApiError::Config("RIOT_API_KEY not set in the environment or .env file".to_string())
        })?;

        let location =
            env::var("RIOT_LOCATION").unwrap_or_else(|_| DEFAULT_LOCATION.to_string());

        Ok(Config { api_key, location })
    }
}
