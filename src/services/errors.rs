use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::infrastructure::neo_feed::FeedError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("upstream feed unavailable: {0}")]
    Upstream(#[from] FeedError),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Upstream(FeedError::Transport(_)) => "UPSTREAM_TRANSPORT",
            ServiceError::Upstream(FeedError::Status(_)) => "UPSTREAM_STATUS",
            ServiceError::Upstream(FeedError::Decode(_)) => "UPSTREAM_DECODE",
        }
    }
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.code());
            if let ServiceError::Upstream(FeedError::Status(status)) = self {
                extensions.set("status", i32::from(status.as_u16()));
            }
        })
    }
}
