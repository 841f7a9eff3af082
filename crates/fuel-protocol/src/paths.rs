//! Endpoint paths, relative to the active base URL.

use url::form_urlencoded;

pub const HEALTH: &str = "/api/v1/health";
pub const REGISTER: &str = "/api/v1/auth/register";
pub const LOGIN: &str = "/api/v1/auth/login";
pub const ME: &str = "/api/v1/auth/me";
pub const PROFILE: &str = "/api/v1/profile";
pub const PREDICT: &str = "/api/v1/predict";
pub const SIMULATE: &str = "/api/v1/simulate";
pub const FOODS_ALL: &str = "/api/v1/foods?scope=all";
pub const FOODS: &str = "/api/v1/foods";
pub const WORKOUTS: &str = "/api/v1/workouts";
pub const INTEGRATIONS: &str = "/api/v1/integrations";

pub fn food(food_id: i64) -> String {
    format!("/api/v1/foods/{}", food_id)
}

pub fn workouts(limit: u32) -> String {
    format!("/api/v1/workouts?limit={}", limit)
}

pub fn workout(workout_id: i64) -> String {
    format!("/api/v1/workouts/{}", workout_id)
}

pub fn fueling(workout_id: i64) -> String {
    format!("/api/v1/workouts/{}/fueling", workout_id)
}

pub fn fuel_event(workout_id: i64, event_id: i64) -> String {
    format!("/api/v1/workouts/{}/fueling/{}", workout_id, event_id)
}

pub fn oauth_start(provider: &str, client: &str) -> String {
    format!(
        "/api/v1/integrations/{}/oauth/start?client={}",
        encode(provider),
        encode(client)
    )
}

pub fn sync(provider: &str, kind: &str, limit: u32) -> String {
    format!(
        "/api/v1/integrations/{}/sync?kind={}&limit={}",
        encode(provider),
        encode(kind),
        limit
    )
}

/// Provider names come from user input and must stay a single segment.
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub fn analytics_summary(days: u32) -> String {
    format!("/api/v1/analytics/summary?days={}", days)
}

pub fn analytics_charts(days: u32) -> String {
    format!("/api/v1/analytics/charts?days={}", days)
}
