pub mod use_auth;
pub mod use_chat;
pub mod use_goals;
pub mod use_sync;
pub mod use_transactions;
