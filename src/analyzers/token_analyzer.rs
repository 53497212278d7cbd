use async_trait::async_trait;

use crate::models::TokenDetails;

/// Looks up symbol and decimals for a token contract.
#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn fetch_token_details(&self, token_address: &str) -> TokenDetails;
}

pub struct TokenAnalyzer;

#[async_trait]
impl TokenResolver for TokenAnalyzer {
    async fn fetch_token_details(&self, _token_address: &str) -> TokenDetails {
        TokenDetails {
            symbol: "ABC".to_string(),
            decimals: 18,
        }
    }
}
