use std::collections::BTreeMap;

use async_graphql::{Object, SimpleObject};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub name: Option<String>,
}

impl Author {
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

#[Object]
impl Author {
    async fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn id(&self) -> String {
        self.id.to_string()
    }
}

/// Inclusive date range requested from the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Raw feed body as returned by the upstream, keyed by approach date.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPayload {
    pub element_count: Option<i32>,
    #[serde(default)]
    pub near_earth_objects: BTreeMap<NaiveDate, Vec<NearEarthObject>>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Asteroids {
    pub element_count: Option<i32>,
    pub near_earth_objects: Option<DailyObjects>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "NearEarthObject", rename_fields = "snake_case")]
pub struct DailyObjects {
    pub today: Option<Vec<NearEarthObject>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Links {
    pub next: Option<String>,
    pub prev: Option<String>,
    #[serde(rename = "self")]
    #[graphql(name = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(name = "Today", rename_fields = "snake_case")]
pub struct NearEarthObject {
    pub links: Option<Links>,
    pub id: Option<String>,
    pub neo_reference_id: Option<String>,
    pub name: Option<String>,
    pub nasa_jpl_url: Option<String>,
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    pub close_approach_data: Option<Vec<CloseApproachData>>,
    pub is_sentry_object: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct EstimatedDiameter {
    pub kilometers: Option<Diameter>,
    pub meters: Option<Diameter>,
    pub miles: Option<Diameter>,
    pub feet: Option<Diameter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Diameter {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CloseApproachData {
    pub close_approach_date: Option<String>,
    pub close_approach_date_full: Option<String>,
    pub epoch_date_close_approach: Option<f64>,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
    pub orbiting_body: Option<String>,
}

// The upstream encodes these measurements as decimal strings.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct RelativeVelocity {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub kilometers_per_second: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub kilometers_per_hour: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub miles_per_hour: Option<f64>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct MissDistance {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub astronomical: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub lunar: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub kilometers: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub miles: Option<f64>,
}
