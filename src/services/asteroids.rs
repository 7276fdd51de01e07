use std::sync::Arc;

use tracing::warn;

use crate::{
    domain::{feed::into_asteroids, models::Asteroids},
    infrastructure::state::AppState,
};

use super::errors::ServiceError;

pub struct AsteroidService {
    pub state: Arc<AppState>,
}

impl AsteroidService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Fetches the configured window from the upstream feed and exposes the
    /// start date's objects as `today`.
    ///
    /// Every call goes to the upstream; nothing is cached or retried.
    pub async fn today(&self) -> Result<Asteroids, ServiceError> {
        let window = self.state.config.feed.window();
        let payload = self.state.feed.fetch(&window).await.map_err(|err| {
            warn!(error = %err, "near-earth-object feed request failed");
            ServiceError::Upstream(err)
        })?;
        Ok(into_asteroids(payload, &window))
    }
}
