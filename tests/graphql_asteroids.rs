use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;


use test_harness::{build_app, execute, FailingFeed, FixtureFeed};

const ASTEROIDS_QUERY: &str = r#"
{
  asteroids {
    element_count
    links { self }
    near_earth_objects {
      today {
        id
        name
        is_potentially_hazardous_asteroid
        close_approach_data {
          close_approach_date
          epoch_date_close_approach
          relative_velocity { kilometers_per_second }
          miss_distance { lunar }
          orbiting_body
        }
        estimated_diameter {
          meters { estimated_diameter_min }
        }
      }
    }
  }
}
"#;

#[tokio::test]
async fn asteroids_projects_today_group() -> Result<()> {
    let app = build_app(Arc::new(FixtureFeed));

    let (status, body) = execute(&app, ASTEROIDS_QUERY).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    let asteroids = &body["data"]["asteroids"];
    assert_eq!(asteroids["element_count"], 2);
    assert!(asteroids["links"]["self"]
        .as_str()
        .unwrap()
        .contains("start_date=2022-05-24"));

    let today = asteroids["near_earth_objects"]["today"]
        .as_array()
        .expect("today list");
    assert_eq!(today.len(), 2);
    assert_eq!(today[0]["id"], "2154347");
    assert_eq!(today[0]["is_potentially_hazardous_asteroid"], false);

    let approach = &today[0]["close_approach_data"][0];
    assert_eq!(approach["close_approach_date"], "2022-05-24");
    assert_eq!(approach["orbiting_body"], "Earth");
    assert!(approach["relative_velocity"]["kilometers_per_second"].is_f64());
    assert!(approach["miss_distance"]["lunar"].is_f64());
    assert!(today[0]["estimated_diameter"]["meters"]["estimated_diameter_min"].is_f64());
    Ok(())
}

#[tokio::test]
async fn upstream_failure_nulls_field_and_keeps_authors() -> Result<()> {
    let app = build_app(Arc::new(FailingFeed(reqwest::StatusCode::INTERNAL_SERVER_ERROR)));

    let (status, body) = execute(&app, "{ asteroids { element_count } }").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "asteroids": null }));
    let errors = body["errors"].as_array().expect("errors list");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["asteroids"]));
    assert_eq!(errors[0]["extensions"]["code"], "UPSTREAM_STATUS");
    assert_eq!(errors[0]["extensions"]["status"], 500);

    let (_, authors) = execute(&app, "{ authors { id } }").await?;
    assert_eq!(authors["data"]["authors"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[tokio::test]
async fn failing_asteroids_do_not_block_sibling_fields() -> Result<()> {
    let app = build_app(Arc::new(FailingFeed(reqwest::StatusCode::FORBIDDEN)));

    let (_, body) = execute(&app, "{ authors { name } asteroids { element_count } }").await?;

    assert_eq!(body["data"]["asteroids"], Value::Null);
    assert_eq!(body["data"]["authors"][4]["name"], "Sandi Metz");
    assert_eq!(body["errors"][0]["extensions"]["status"], 403);
    Ok(())
}

#[tokio::test]
async fn graphiql_and_health_routes_respond() -> Result<()> {
    let app = build_app(Arc::new(FixtureFeed));

    let graphiql = app
        .clone()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty())?)
        .await?;
    assert_eq!(graphiql.status(), StatusCode::OK);
    let page = to_bytes(graphiql.into_body(), usize::MAX).await?;
    assert!(String::from_utf8_lossy(&page).contains("graphiql"));

    let health = app
        .clone()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty())?)
        .await?;
    assert_eq!(health.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&to_bytes(health.into_body(), usize::MAX).await?)?;
    assert_eq!(body, json!({ "status": "ok" }));

    let missing = app
        .oneshot(Request::builder().uri("/nowhere").body(Body::empty())?)
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    Ok(())
}
