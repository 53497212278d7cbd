// src/telegram.rs
use anyhow::Result;
use log::{error, info, warn};
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode, utils::command::BotCommands, Bot};

use crate::config::chains::CHAINS;
use crate::utils::{capitalize, format_trade_message};
use crate::wallet_store::WalletStore;
use crate::AppState;

/// Token address handed to the analyzers until pairs carry real ones.
pub const PLACEHOLDER_TOKEN_ADDRESS: &str = "0xTokenAddress";
pub const TRADE_AMOUNT: f64 = 100.0;

const GREETING: &str = "👋 Smart Wallet Tracker Bot is online! Use /track to scan wallets.";
const NO_ACTIVITY: &str = "No wallet activity detected currently.";
const NO_WALLETS: &str = "No wallets are currently being tracked.";

pub struct TelegramBot {
    bot: Bot,
}

impl TelegramBot {
    pub async fn new(token: &str) -> Self {
        let bot = Bot::new(token);

        // Test the bot connection
        match bot.get_me().await {
            Ok(me) => info!("✅ Telegram bot connected: @{}", me.username()),
            Err(e) => warn!("⚠️ Could not reach Telegram yet: {}", e),
        }

        Self { bot }
    }

    pub async fn start(&self, state: Arc<AppState>) {
        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(answer_command);

        info!("🤖 Bot started. Listening for commands...");

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![state])
            .default_handler(|upd| async move {
                log::debug!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "Exception while handling update",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Smart Wallet Tracker commands:")]
pub enum Command {
    #[command(description = "Check the bot is online")]
    Start,
    #[command(description = "Scan trending pairs on every chain for wallet activity")]
    Track,
    #[command(description = "List every wallet tracked so far")]
    ListWallets,
    #[command(description = "Show this help message")]
    Help,
}

/// Errors stop here: they are logged with the update they came from and the
/// user gets no reply.
async fn answer_command(bot: Bot, msg: Message, cmd: Command, state: Arc<AppState>) -> ResponseResult<()> {
    if let Err(e) = handle_command(&bot, &msg, cmd, &state).await {
        error!(
            "Exception while handling update (chat {}, message {}, text {:?}): {:#}",
            msg.chat.id.0,
            msg.id.0,
            msg.text().unwrap_or_default(),
            e
        );
    }
    Ok(())
}

async fn handle_command(bot: &Bot, msg: &Message, cmd: Command, state: &AppState) -> Result<()> {
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => {
            bot.send_message(chat_id, GREETING).await?;
        }
        Command::Track => {
            let report = track_report(state).await;
            // the message template is written for legacy Markdown
            #[allow(deprecated)]
            let parse_mode = ParseMode::Markdown;
            bot.send_message(chat_id, report)
                .parse_mode(parse_mode)
                .await?;
        }
        Command::ListWallets => {
            bot.send_message(chat_id, list_wallets_report(&state.wallets).await)
                .await?;
        }
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
    }

    Ok(())
}

/// Walk every chain, scan, and render one block per tracked wallet per chain.
pub async fn track_report(state: &AppState) -> String {
    let mut messages = Vec::new();

    for chain in CHAINS.iter() {
        let pairs = state.market.fetch_trending(chain.api_identifier).await;
        let wallets = state.scanner.scan_for_early_buys(&pairs, &state.wallets).await;

        for wallet in wallets {
            let token = state.tokens.fetch_token_details(PLACEHOLDER_TOKEN_ADDRESS).await;
            let risk = state.risk.honeypot_check(PLACEHOLDER_TOKEN_ADDRESS).await;
            let message = format_trade_message(&wallet, &token, TRADE_AMOUNT, risk);
            messages.push(format!("*{} Chain*\n{}", capitalize(chain.display_name), message));
        }
    }

    if messages.is_empty() {
        NO_ACTIVITY.to_string()
    } else {
        messages.join("\n\n")
    }
}

pub async fn list_wallets_report(wallets: &WalletStore) -> String {
    if wallets.is_empty().await {
        return NO_WALLETS.to_string();
    }
    format!("Currently tracked wallets:\n{}", wallets.snapshot().await.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::honeypot_checker::HoneypotChecker;
    use crate::analyzers::token_analyzer::TokenAnalyzer;
    use crate::models::{TrendingPair, WalletAddress};
    use crate::scanners::dex_screener::TrendingSource;
    use crate::scanners::wallet_scanner::{PlaceholderWalletScanner, WalletScanner, DUMMY_WALLET};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Behaves like an upstream that is down for every chain.
    #[derive(Default)]
    struct DownSource {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TrendingSource for DownSource {
        async fn fetch_trending(&self, chain_id: &str) -> Vec<TrendingPair> {
            self.calls.lock().unwrap().push(chain_id.to_string());
            Vec::new()
        }
    }

    struct FindsNothing(AtomicUsize);

    #[async_trait]
    impl WalletScanner for FindsNothing {
        async fn scan_for_early_buys(&self, _pairs: &[TrendingPair], store: &WalletStore) -> Vec<WalletAddress> {
            self.0.fetch_add(1, Ordering::SeqCst);
            store.snapshot().await
        }
    }

    fn state_with(market: Arc<DownSource>, scanner: Arc<dyn WalletScanner>) -> AppState {
        AppState {
            wallets: WalletStore::new(),
            market,
            scanner,
            risk: Arc::new(HoneypotChecker),
            tokens: Arc::new(TokenAnalyzer),
        }
    }

    #[tokio::test]
    async fn test_fresh_track_yields_one_block_per_chain() {
        let market = Arc::new(DownSource::default());
        let state = state_with(market.clone(), Arc::new(PlaceholderWalletScanner));

        let report = track_report(&state).await;
        let blocks: Vec<&str> = report.split("\n\n").collect();

        assert_eq!(blocks.len(), 5);
        let headers: Vec<&str> = blocks.iter().map(|b| b.lines().next().unwrap()).collect();
        assert_eq!(
            headers,
            vec![
                "*Ethereum Chain*",
                "*Bsc Chain*",
                "*Polygon Chain*",
                "*Arbitrum Chain*",
                "*Solana Chain*"
            ]
        );
        for block in &blocks {
            assert!(block.contains(&format!("`{}`", DUMMY_WALLET)));
            assert!(block.contains("100 ABC"));
            assert!(block.contains("*Medium*"));
            assert!(block.contains("https://dexscreener.com/ethereum/ABC"));
        }

        assert_eq!(
            *market.calls.lock().unwrap(),
            vec!["ethereum", "bsc", "polygon", "arbitrum-one", "solana"]
        );
    }

    #[tokio::test]
    async fn test_each_chain_reprocesses_cumulative_set() {
        let state = state_with(Arc::new(DownSource::default()), Arc::new(PlaceholderWalletScanner));
        state.wallets.insert("0xEarlier").await;

        let report = track_report(&state).await;

        // two wallets on each of five chains
        assert_eq!(report.split("\n\n").count(), 10);
        assert_eq!(state.wallets.len().await, 2);
    }

    #[tokio::test]
    async fn test_no_activity_when_nothing_tracked() {
        let scanner = Arc::new(FindsNothing(AtomicUsize::new(0)));
        let state = state_with(Arc::new(DownSource::default()), scanner.clone());

        assert_eq!(track_report(&state).await, NO_ACTIVITY);
        assert_eq!(scanner.0.load(Ordering::SeqCst), CHAINS.len());
    }

    #[tokio::test]
    async fn test_list_wallets_before_and_after_track() {
        let state = state_with(Arc::new(DownSource::default()), Arc::new(PlaceholderWalletScanner));

        assert_eq!(list_wallets_report(&state.wallets).await, NO_WALLETS);

        track_report(&state).await;
        assert_eq!(
            list_wallets_report(&state.wallets).await,
            format!("Currently tracked wallets:\n{}", DUMMY_WALLET)
        );

        // a second /track doesn't add anything new
        track_report(&state).await;
        assert_eq!(state.wallets.len().await, 1);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::parse("/list_wallets", "bot").unwrap(), Command::ListWallets);
        assert_eq!(Command::parse("/track", "bot").unwrap(), Command::Track);
        assert_eq!(Command::parse("/start", "bot").unwrap(), Command::Start);

        let help = Command::descriptions().to_string();
        assert!(help.contains("/list_wallets"));
        assert!(help.contains("/track"));
    }
}
