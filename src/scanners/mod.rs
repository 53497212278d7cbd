pub mod dex_screener;
pub mod wallet_scanner;
