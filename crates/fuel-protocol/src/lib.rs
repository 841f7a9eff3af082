//! Fuel protocol definitions
//!
//! JSON request and response bodies of the backend's `/api/v1` surface, the
//! endpoint paths, and the conversions between wire shapes and the domain
//! types of `fuel-core`. Field names match the wire format exactly.

pub mod analytics;
pub mod auth;
pub mod foods;
pub mod health;
pub mod integrations;
pub mod paths;
pub mod prediction;
pub mod profile;
pub mod workouts;

pub use analytics::{
    AnalyticsCharts, AnalyticsChartsEnvelope, AnalyticsSummary, AnalyticsSummaryEnvelope,
};
pub use auth::{AuthEnvelope, LoginRequest, MeEnvelope, RegisterRequest, UserDto};
pub use foods::{FoodDraft, FoodEnvelope, FoodItem, FoodsEnvelope};
pub use fuel_core::SimpleOk;
pub use health::HealthEnvelope;
pub use integrations::{
    IntegrationStatus, IntegrationsEnvelope, OAuthStartEnvelope, SyncEnvelope, SyncKind,
};
pub use prediction::{
    EnvironmentPayload, FuelingAction, PredictionRequestBody, PredictionResponse, ProfilePayload,
    SessionPayload, SimulationRequestBody, SimulationResponse, Strategy,
};
pub use profile::{ProfileDto, ProfileEnvelope, ProfileUpdate};
pub use workouts::{
    FuelEvent, FuelEventDraft, FuelEventEnvelope, FuelEventsEnvelope, Workout, WorkoutCreate,
    WorkoutEnvelope, WorkoutUpdate, WorkoutsEnvelope,
};
