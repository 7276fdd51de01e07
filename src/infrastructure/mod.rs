pub mod config;
pub mod neo_feed;
pub mod state;
