use std::sync::Arc;

use fuel_adapters::{MemoryKeyValueStore, StubTransport};
use fuel_core::HttpMethod;
use fuel_protocol::paths;

use super::{ManagerSettings, SessionManager};

pub const PRIMARY: &str = "https://api.example.com";
pub const CLOUD: &str = "https://cloud.example.com";
pub const LOCAL: &str = "http://127.0.0.1:8000";

pub const TOKEN: &str = "token-1";
pub const EMAIL: &str = "rider@example.com";

pub const HEALTH_BODY: &str = r#"{"ok": true, "service": "endurance-fuel-ai", "version": "0.5.0"}"#;

pub const AUTH_BODY: &str = r#"{
    "access_token": "token-2",
    "token_type": "bearer",
    "user": {"id": 11, "email": "new@example.com"},
    "profile": {"body_mass_kg": 64.0, "vo2max": 58.0}
}"#;

pub const FOODS_BODY: &str = r#"{"items": [
    {"id": 1, "name": "Gel", "category": "gel", "serving_desc": "1 sachet",
     "carbs_g": 25, "sodium_mg": 50, "fluid_ml": 0, "caffeine_mg": 0, "is_builtin": 1},
    {"id": 2, "name": "Drink mix", "category": "drink", "serving_desc": "500 ml",
     "carbs_g": 40, "sodium_mg": 300, "fluid_ml": 500, "caffeine_mg": 0, "is_builtin": 1}
]}"#;

pub const WORKOUTS_BODY: &str = r#"{"items": [
    {"id": 7, "source": "manual", "sport": "cycling", "status": "completed",
     "start_time": "2026-03-02T07:30:00Z", "duration_minutes": 120.0},
    {"id": 5, "source": "strava", "external_id": "998", "sport": "running", "status": "completed"}
]}"#;

pub const WORKOUT_ITEM_BODY: &str = r#"{"item":
    {"id": 7, "source": "manual", "sport": "cycling", "status": "completed",
     "completed_carbs_g": 90.0}
}"#;

pub const INTEGRATIONS_BODY: &str = r#"{"items": [
    {"provider": "strava", "connected": true, "updated_at": "2026-03-01T10:00:00Z"},
    {"provider": "garmin", "connected": false}
]}"#;

pub const SUMMARY_BODY: &str = r#"{"summary": {"sessions": 4, "avg_duration_minutes": 75.0,
    "avg_heart_rate_bpm": 142.0, "avg_power_watts": 210.0, "avg_rpe": 6.0,
    "total_distance_km": 120.5, "total_carbs_g": 310.0}}"#;

pub const CHARTS_BODY: &str = r#"{"charts": {"labels": ["2026-03-01"], "avg_hr": [142.0],
    "avg_power": [210.0], "total_minutes": [75.0], "carbs_g": [80.0], "distance_km": [30.0]}}"#;

pub const PREDICTION_BODY: &str = r#"{
    "recommendation_id": "rec-1",
    "strategies": [{"strategy": "balanced", "carbs_g_per_hour": 75, "hydration_ml_per_hour": 600,
        "sodium_mg_per_hour": 500, "pre_workout_carbs_g": 60, "during_workout_carbs_g_total": 112,
        "post_workout_carbs_g": 80, "gi_risk_score": 2.5}],
    "confidence_low": 0.7,
    "confidence_high": 0.85,
    "uncertainty_notes": [],
    "rationale": ["Moderate heat"],
    "fueling_schedule": [{"minute_offset": 20, "action": "eat", "food_name": "Gel",
        "serving": "1 sachet", "carbs_g": 25, "sodium_mg": 50, "fluid_ml": 0, "notes": ""}]
}"#;

pub fn settings() -> ManagerSettings {
    ManagerSettings {
        fallback_url: CLOUD.to_string(),
        oauth_client: "web".to_string(),
        workout_limit: 120,
        analytics_days: 30,
        sync_limit: 80,
        heal_local_on_start: false,
    }
}

pub fn url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}

pub struct Harness {
    pub transport: Arc<StubTransport>,
    pub store: Arc<MemoryKeyValueStore>,
    pub manager: SessionManager,
}

impl Harness {
    pub fn with_store(store: MemoryKeyValueStore, settings: ManagerSettings) -> Self {
        let transport = Arc::new(StubTransport::new());
        let store = Arc::new(store);
        let manager =
            SessionManager::with_settings(transport.clone(), store.clone(), PRIMARY, settings);
        Self {
            transport,
            store,
            manager,
        }
    }

    pub fn signed_out(base_url: &str) -> Self {
        Self::with_store(
            MemoryKeyValueStore::with_entries(&[("api_base_url", base_url)]),
            settings(),
        )
    }

    pub fn signed_in(base_url: &str) -> Self {
        Self::with_store(
            MemoryKeyValueStore::with_entries(&[
                ("api_base_url", base_url),
                ("access_token", TOKEN),
                ("user_email", EMAIL),
            ]),
            settings(),
        )
    }

    /// A fresh manager over the same durable state.
    pub fn restart(&self) -> SessionManager {
        SessionManager::with_settings(
            self.transport.clone(),
            self.store.clone(),
            PRIMARY,
            settings(),
        )
    }

    pub fn stub_health(&self, base_url: &str) {
        self.transport
            .given_json(HttpMethod::Get, &url(base_url, paths::HEALTH), HEALTH_BODY);
    }

    pub fn stub_foods(&self, base_url: &str) {
        self.transport
            .given_json(HttpMethod::Get, &url(base_url, paths::FOODS_ALL), FOODS_BODY);
    }

    pub fn stub_workouts(&self, base_url: &str) {
        self.transport.given_json(
            HttpMethod::Get,
            &url(base_url, &paths::workouts(120)),
            WORKOUTS_BODY,
        );
    }

    pub fn stub_integrations(&self, base_url: &str) {
        self.transport.given_json(
            HttpMethod::Get,
            &url(base_url, paths::INTEGRATIONS),
            INTEGRATIONS_BODY,
        );
    }

    pub fn stub_analytics(&self, base_url: &str) {
        self.transport.given_json(
            HttpMethod::Get,
            &url(base_url, &paths::analytics_summary(30)),
            SUMMARY_BODY,
        );
        self.transport.given_json(
            HttpMethod::Get,
            &url(base_url, &paths::analytics_charts(30)),
            CHARTS_BODY,
        );
    }

    pub fn stub_collections(&self, base_url: &str) {
        self.stub_foods(base_url);
        self.stub_workouts(base_url);
        self.stub_integrations(base_url);
        self.stub_analytics(base_url);
    }
}
