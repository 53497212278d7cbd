pub mod honeypot_checker;
pub mod token_analyzer;
