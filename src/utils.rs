// src/utils.rs
use crate::models::{RiskLevel, TokenDetails};

/// Render one wallet's trade as a legacy-Markdown block.
///
/// Nothing is escaped, so markup characters in `wallet` or the symbol end up
/// in the output as-is.
pub fn format_trade_message(wallet: &str, token: &TokenDetails, amount: f64, risk: RiskLevel) -> String {
    format!(
        "Wallet: `{}`\n\
         Traded Amount: {} {}\n\
         Risk Level: *{}*\n\
         Token Info: https://dexscreener.com/ethereum/{}",
        wallet, amount, token.symbol, risk, token.symbol
    )
}

/// Upper-case the first character, lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
