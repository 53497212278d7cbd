// src/main.rs
use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

mod analyzers;
mod config;
mod models;
mod scanners;
mod telegram;
mod utils;
mod wallet_store;

use analyzers::honeypot_checker::{HoneypotChecker, RiskAnalyzer};
use analyzers::token_analyzer::{TokenAnalyzer, TokenResolver};
use config::Config;
use scanners::dex_screener::{DexScreenerScanner, TrendingSource};
use scanners::wallet_scanner::{PlaceholderWalletScanner, WalletScanner};
use telegram::TelegramBot;
use wallet_store::WalletStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("🚀 Starting Smart Wallet Tracker Bot");

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("✅ Configuration loaded: {:?}", config);

    let market = DexScreenerScanner::new(&config)?;

    // Initialize Telegram bot
    let telegram = TelegramBot::new(&config.telegram_token).await;

    // Create shared state
    let app_state = Arc::new(AppState {
        wallets: WalletStore::new(),
        market: Arc::new(market),
        scanner: Arc::new(PlaceholderWalletScanner),
        risk: Arc::new(HoneypotChecker),
        tokens: Arc::new(TokenAnalyzer),
    });

    telegram.start(app_state).await;

    info!("🛑 Bot stopped");
    Ok(())
}

/// Shared application state
pub struct AppState {
    pub wallets: WalletStore,
    pub market: Arc<dyn TrendingSource>,
    pub scanner: Arc<dyn WalletScanner>,
    pub risk: Arc<dyn RiskAnalyzer>,
    pub tokens: Arc<dyn TokenResolver>,
}
