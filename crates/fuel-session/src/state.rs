use fuel_core::{AthleteProfile, Session};
use fuel_protocol::{
    AnalyticsCharts, AnalyticsSummary, FoodItem, FuelEvent, IntegrationStatus, PredictionResponse,
    SimulationResponse, Workout,
};

/// Everything the client currently knows. Replaced field by field as backend
/// calls resolve; observers get a fresh snapshot on every change.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub session: Session,
    pub profile: AthleteProfile,

    pub is_loading: bool,
    pub error_message: String,
    pub status_message: String,

    pub prediction: Option<PredictionResponse>,
    pub simulation: Option<SimulationResponse>,
    pub workouts: Vec<Workout>,
    pub selected_workout_id: Option<i64>,
    /// Always belong to `selected_workout_id`.
    pub fuel_events: Vec<FuelEvent>,
    pub foods: Vec<FoodItem>,
    pub integrations: Vec<IntegrationStatus>,
    pub analytics_summary: Option<AnalyticsSummary>,
    pub analytics_charts: Option<AnalyticsCharts>,
}

impl StoreState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn selected_workout(&self) -> Option<&Workout> {
        let id = self.selected_workout_id?;
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Drops credentials and everything fetched on their behalf. The food
    /// catalog is kept: it is refetched wholesale on the next sign-in.
    pub(crate) fn clear_account(&mut self) {
        self.session.sign_out();
        self.prediction = None;
        self.simulation = None;
        self.workouts.clear();
        self.selected_workout_id = None;
        self.fuel_events.clear();
        self.integrations.clear();
        self.analytics_summary = None;
        self.analytics_charts = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_account_keeps_backend_and_foods() {
        let mut session = Session::new("https://api.example.com");
        session.sign_in("token", "rider@example.com");
        let mut state = StoreState::new(session);
        state.selected_workout_id = Some(4);
        state.foods = vec![FoodItem {
            id: 1,
            name: "Gel".to_string(),
            category: "gel".to_string(),
            serving_desc: "1 sachet".to_string(),
            carbs_g: 25.0,
            sodium_mg: 50.0,
            fluid_ml: 0.0,
            caffeine_mg: 0.0,
            is_builtin: true,
        }];

        state.clear_account();

        assert!(!state.is_authenticated());
        assert!(state.selected_workout_id.is_none());
        assert_eq!(state.session.base_url, "https://api.example.com");
        assert_eq!(state.foods.len(), 1);
    }
}
