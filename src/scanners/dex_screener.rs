// the lookout on the mast:

// Asks DEX Screener what's trending on one chain
// Hands back whatever pairs it got
// Shrugs and hands back nothing if the API is down

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Config, HTTP_TIMEOUT};
use crate::models::TrendingPair;

/// Anything that can list trending pairs for a chain id.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    /// Never fails: an unreachable or misbehaving upstream yields an empty list.
    async fn fetch_trending(&self, chain_id: &str) -> Vec<TrendingPair>;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("DEX Screener API error: {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid JSON body: {0}")]
    Decode(reqwest::Error),
}

pub struct DexScreenerScanner {
    client: Client,
    base_url: String,
}

impl DexScreenerScanner {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent("SmartWalletTracker/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn trending_url(&self, chain_id: &str) -> String {
        format!("{}/latest/dex/trending/{}", self.base_url, chain_id)
    }

    async fn try_fetch_trending(&self, chain_id: &str) -> Result<Vec<TrendingPair>, FetchError> {
        let response = self.client.get(self.trending_url(chain_id)).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let trending: TrendingResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e)
            } else {
                FetchError::Http(e)
            }
        })?;

        Ok(trending.pairs.unwrap_or_default())
    }
}

#[async_trait]
impl TrendingSource for DexScreenerScanner {
    async fn fetch_trending(&self, chain_id: &str) -> Vec<TrendingPair> {
        match self.try_fetch_trending(chain_id).await {
            Ok(pairs) => {
                info!("🌐 Fetched {} trending tokens for {}", pairs.len(), chain_id);
                pairs
            }
            Err(e) => {
                error!("❌ Error fetching trending tokens for {}: {}", chain_id, e);
                Vec::new()
            }
        }
    }
}

// DEX Screener API Response Types
#[derive(Debug, Deserialize)]
struct TrendingResponse {
    pairs: Option<Vec<TrendingPair>>,
}
