use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    domain::models::{Asteroids, Author},
    infrastructure::state::AppState,
    services::asteroids::AsteroidService,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every known author, oldest first.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let state = ctx.data::<Arc<AppState>>()?;
        Ok(Some(state.authors.list().into_iter().map(Some).collect()))
    }

    /// Near-earth objects for the configured feed window.
    async fn asteroids(&self, ctx: &Context<'_>) -> Result<Option<Asteroids>> {
        let state = ctx.data::<Arc<AppState>>()?;
        let asteroids = AsteroidService::new(Arc::clone(state))
            .today()
            .await
            .map_err(|err| err.extend())?;
        Ok(Some(asteroids))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_author(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Option<Author>> {
        let state = ctx.data::<Arc<AppState>>()?;
        Ok(Some(state.authors.add(name)))
    }
}
