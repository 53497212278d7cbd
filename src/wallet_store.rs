// src/wallet_store.rs
use tokio::sync::RwLock;

use crate::models::WalletAddress;

/// Every wallet the bot has ever picked up, shared by all chats.
///
/// Addresses are unique and kept in the order they were first seen. Nothing
/// is ever removed and nothing survives a restart.
#[derive(Default)]
pub struct WalletStore {
    wallets: RwLock<Vec<WalletAddress>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the address was not tracked yet.
    pub async fn insert(&self, wallet: &str) -> bool {
        let mut wallets = self.wallets.write().await;
        if wallets.iter().any(|w| w == wallet) {
            return false;
        }
        wallets.push(wallet.to_string());
        true
    }

    pub async fn snapshot(&self) -> Vec<WalletAddress> {
        self.wallets.read().await.clone()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.wallets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wallets.read().await.is_empty()
    }
}
