use async_trait::async_trait;

use crate::models::RiskLevel;

#[async_trait]
pub trait RiskAnalyzer: Send + Sync {
    /// Classify how likely the token at `token_address` is a honeypot.
    async fn honeypot_check(&self, token_address: &str) -> RiskLevel;
}

/// Rates every token as medium risk without looking at it.
pub struct HoneypotChecker;

#[async_trait]
impl RiskAnalyzer for HoneypotChecker {
    async fn honeypot_check(&self, _token_address: &str) -> RiskLevel {
        // TODO: simulate a buy and sell on-chain before classifying
        RiskLevel::Medium
    }
}
