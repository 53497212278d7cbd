use async_trait::async_trait;
use log::debug;

use crate::models::{TrendingPair, WalletAddress};
use crate::wallet_store::WalletStore;

/// Stand-in address recorded by the placeholder scanner.
pub const DUMMY_WALLET: &str = "0xDummyWalletAddress1234567890";

/// Finds wallets that bought into trending pairs early.
#[async_trait]
pub trait WalletScanner: Send + Sync {
    /// Records any wallets found in `store` and returns everything tracked so
    /// far, not just this call's finds.
    async fn scan_for_early_buys(
        &self,
        pairs: &[TrendingPair],
        store: &WalletStore,
    ) -> Vec<WalletAddress>;
}

/// Ignores the pairs and always records [`DUMMY_WALLET`].
pub struct PlaceholderWalletScanner;

#[async_trait]
impl WalletScanner for PlaceholderWalletScanner {
    async fn scan_for_early_buys(
        &self,
        pairs: &[TrendingPair],
        store: &WalletStore,
    ) -> Vec<WalletAddress> {
        // TODO: scan transfer logs of each pair for early buyers
        debug!("🐋 Placeholder scan over {} pairs", pairs.len());
        store.insert(DUMMY_WALLET).await;
        store.snapshot().await
    }
}
