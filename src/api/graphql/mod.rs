//! GraphQL endpoint: `POST /graphql` executes documents, `GET /graphql`
//! serves GraphiQL.

use std::sync::Arc;

use async_graphql::{extensions::Tracing, http::GraphiQLSource, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::infrastructure::state::AppState;

pub mod schema;

pub use schema::{MutationRoot, QueryRoot};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: Arc<AppState>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .extension(Tracing)
        .finish()
}

/// SDL for the schema; resolver data is not needed to describe it.
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub fn router() -> Router {
    Router::new().route("/graphql", get(graphiql).post(handler))
}

async fn handler(Extension(schema): Extension<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::{
        domain::models::{FeedPayload, FeedWindow},
        infrastructure::{
            config::Config,
            neo_feed::{FeedError, NeoFeed},
        },
    };

    struct EmptyFeed;

    #[async_trait]
    impl NeoFeed for EmptyFeed {
        async fn fetch(&self, _window: &FeedWindow) -> Result<FeedPayload, FeedError> {
            Ok(serde_json::from_value(json!({ "element_count": 0, "near_earth_objects": {} }))?)
        }
    }

    fn schema() -> AppSchema {
        let state = AppState::new(Arc::new(Config::default()), Arc::new(EmptyFeed));
        build_schema(Arc::new(state))
    }

    #[test]
    fn sdl_declares_original_type_names() {
        let sdl = export_sdl();

        for fragment in [
            "type Author",
            "type Asteroids",
            "type NearEarthObject",
            "type Today",
            "type Links",
            "type CloseApproachData",
            "type MissDistance",
            "type RelativeVelocity",
            "type EstimatedDiameter",
            "type Diameter",
            "authors: [Author]\n",
            "addAuthor(name: String): Author\n",
            "asteroids: Asteroids\n",
            "name: String\n",
            "id: String!",
            "near_earth_objects: NearEarthObject",
            "is_potentially_hazardous_asteroid: Boolean",
            "self: String",
        ] {
            assert!(sdl.contains(fragment), "missing `{fragment}` in:\n{sdl}");
        }
    }

    #[tokio::test]
    async fn add_author_without_name_stores_null() {
        let schema = schema();

        let response = schema.execute("mutation { addAuthor { name id } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["addAuthor"]["name"], serde_json::Value::Null);
        assert_eq!(data["addAuthor"]["id"].as_str().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn missing_date_group_resolves_today_to_null() {
        let schema = schema();

        let response = schema
            .execute("{ asteroids { element_count near_earth_objects { today { id } } } }")
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({
                "asteroids": {
                    "element_count": 0,
                    "near_earth_objects": { "today": null }
                }
            })
        );
    }
}
