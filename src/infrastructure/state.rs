use std::sync::Arc;

use crate::{
    infrastructure::{config::Config, neo_feed::NeoFeed},
    services::authors::AuthorDirectory,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub authors: Arc<AuthorDirectory>,
    pub feed: Arc<dyn NeoFeed>,
}

impl AppState {
    pub fn new(config: Arc<Config>, feed: Arc<dyn NeoFeed>) -> Self {
        Self {
            config,
            authors: Arc::new(AuthorDirectory::seeded()),
            feed,
        }
    }
}
