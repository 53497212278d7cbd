// src/config.rs
//everything the bot needs to know before it says hello:
//which token to log in with
//where to fetch trending pairs from
//which chains to walk on /track

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.dexscreener.com";

/// Every request against the market-data API gives up after this long.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN not set in .env file!")]
    MissingToken,
}

#[derive(Clone)]
pub struct Config {
    // Telegram
    pub telegram_token: String,

    // Market data
    pub api_base_url: String,
}

// keep the token out of the logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("BOT_TOKEN").ok(), env::var("DEXSCREENER_API_URL").ok())
    }

    fn from_vars(token: Option<String>, api_base_url: Option<String>) -> Result<Self, ConfigError> {
        let telegram_token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let api_base_url = api_base_url
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Config {
            telegram_token,
            api_base_url,
        })
    }
}

pub mod chains {
    /// A supported network: the name users see and the id DEX Screener expects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChainEntry {
        pub display_name: &'static str,
        pub api_identifier: &'static str,
    }

    /// Walked in this order by /track.
    pub const CHAINS: [ChainEntry; 5] = [
        ChainEntry { display_name: "ethereum", api_identifier: "ethereum" },
        ChainEntry { display_name: "bsc", api_identifier: "bsc" },
        ChainEntry { display_name: "polygon", api_identifier: "polygon" },
        ChainEntry { display_name: "arbitrum", api_identifier: "arbitrum-one" },
        ChainEntry { display_name: "solana", api_identifier: "solana" },
    ];
}
