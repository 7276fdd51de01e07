use crate::domain::models::{Asteroids, DailyObjects, FeedPayload, FeedWindow};

/// Reshapes the upstream payload into the `Asteroids` graph.
///
/// The upstream groups objects under their approach date. Only the group
/// keyed by the window's start date is kept and exposed as `today`; a
/// missing group yields `today: null` rather than an error.
pub fn into_asteroids(mut payload: FeedPayload, window: &FeedWindow) -> Asteroids {
    let today = payload.near_earth_objects.remove(&window.start_date);
    Asteroids {
        element_count: payload.element_count,
        near_earth_objects: Some(DailyObjects { today }),
        links: payload.links,
    }
}
