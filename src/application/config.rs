/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::BASE_URL;
use crate::utils::config::get_env_or_none;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "SENDFLARE_TOKEN";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
///
/// The request timeout is not part of it: every call uses the fixed
/// `REQUEST_TIMEOUT_SECS`.
pub struct RestApiConfig {
    /// Base URL for the Sendflare REST API
    pub base_url: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Sendflare API client
pub struct Config {
    /// Bearer token sent with every request
    pub token: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration for the given token with the fixed endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Points the configuration at another base URL
    ///
    /// Only meant for tests running against a local mock server; production
    /// code keeps the fixed Sendflare endpoint.
    #[doc(hidden)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Builds a configuration from the environment and an optional `.env` file
    ///
    /// Only the token is read, from `SENDFLARE_TOKEN`; endpoint and timeout stay fixed.
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token: Option<String> = get_env_or_none(TOKEN_ENV);
        if token.is_none() {
            error!("{} not found in environment variables or .env file", TOKEN_ENV);
        }

        Config::new(token.unwrap_or_default())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"***")
            .field("rest_api", &self.rest_api)
            .finish()
    }
}
