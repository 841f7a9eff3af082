use fuel_core::{PlannerState, SimulationDeltas};
use fuel_protocol::{
    paths, AnalyticsChartsEnvelope, AnalyticsSummaryEnvelope, PredictionRequestBody,
    PredictionResponse, SimulationRequestBody, SimulationResponse,
};

use super::SessionManager;

impl SessionManager {
    /// Fueling strategies for the planned or completed session in `plan`,
    /// computed against the current profile.
    pub async fn predict(&self, plan: &PlannerState) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let body = PredictionRequestBody::from_plan(plan, &self.snapshot().profile);
        self.run_request(async {
            let prediction: PredictionResponse = self.post(paths::PREDICT, &body).await?;
            self.update(|state| state.prediction = Some(prediction));
            Ok(())
        })
        .await
    }

    pub async fn simulate(&self, plan: &PlannerState, deltas: SimulationDeltas) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let base_request = PredictionRequestBody::from_plan(plan, &self.snapshot().profile);
        let body = SimulationRequestBody::new(base_request, deltas);
        self.run_request(async {
            let simulation: SimulationResponse = self.post(paths::SIMULATE, &body).await?;
            self.update(|state| state.simulation = Some(simulation));
            Ok(())
        })
        .await
    }

    /// Summary then charts, as one action: neither is replaced unless both
    /// arrive.
    pub async fn load_analytics(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let days = self.settings.analytics_days;
        self.run_request(async {
            let summary: AnalyticsSummaryEnvelope =
                self.get(&paths::analytics_summary(days)).await?;
            let charts: AnalyticsChartsEnvelope = self.get(&paths::analytics_charts(days)).await?;
            self.update(|state| {
                state.analytics_summary = Some(summary.summary);
                state.analytics_charts = Some(charts.charts);
            });
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use fuel_core::{HttpMethod, SportOption};

    const SIMULATION_BODY: &str = r#"{
        "simulated": {"recommendation_id": "rec-2", "strategies": [], "confidence_low": 0.6,
            "confidence_high": 0.8},
        "delta_summary": ["Carbs +8 g/h", "Fluids +150 ml/h"]
    }"#;

    #[tokio::test]
    async fn prediction_is_stored() {
        let harness = Harness::signed_in(PRIMARY);
        harness
            .transport
            .given_json(HttpMethod::Post, &url(PRIMARY, paths::PREDICT), PREDICTION_BODY);

        assert!(harness.manager.predict(&PlannerState::default()).await);

        let prediction = harness.manager.snapshot().prediction.unwrap();
        assert_eq!(prediction.recommendation_id, "rec-1");
        assert_eq!(prediction.strategies[0].carbs_g_per_hour, 75.0);
        assert_eq!(prediction.fueling_schedule[0].minute_offset, 20);
    }

    #[tokio::test]
    async fn prediction_request_carries_profile_and_plan() {
        let harness = Harness::signed_in(PRIMARY);
        harness
            .transport
            .given_json(HttpMethod::Post, &url(PRIMARY, paths::PREDICT), PREDICTION_BODY);
        let mut profile = harness.manager.snapshot().profile;
        profile.bike_ftp_w = Some(280.0);
        harness.manager.set_profile(profile);
        let plan = PlannerState {
            sport: SportOption::Cycling,
            selected_food_ids: vec![2],
            ..PlannerState::default()
        };

        harness.manager.predict(&plan).await;

        let calls = harness.transport.calls();
        let body = calls[0].body.as_deref().unwrap_or_default();
        assert!(body.contains(r#""bike_ftp_w":280.0"#));
        assert!(body.contains(r#""sport":"cycling""#));
        assert!(body.contains(r#""selected_food_ids":[2]"#));
    }

    #[tokio::test]
    async fn failed_prediction_keeps_previous_one() {
        let harness = Harness::signed_in(PRIMARY);
        harness
            .transport
            .given_json(HttpMethod::Post, &url(PRIMARY, paths::PREDICT), PREDICTION_BODY);
        harness.manager.predict(&PlannerState::default()).await;
        harness.transport.given(
            HttpMethod::Post,
            &url(PRIMARY, paths::PREDICT),
            422,
            r#"{"detail": "duration_minutes must be positive"}"#,
        );

        assert!(!harness.manager.predict(&PlannerState::default()).await);

        let state = harness.manager.snapshot();
        assert!(state.prediction.is_some());
        assert_eq!(state.error_message, "duration_minutes must be positive");
    }

    #[tokio::test]
    async fn simulation_sends_deltas_around_base_request() {
        let harness = Harness::signed_in(PRIMARY);
        harness
            .transport
            .given_json(HttpMethod::Post, &url(PRIMARY, paths::SIMULATE), SIMULATION_BODY);

        assert!(
            harness
                .manager
                .simulate(&PlannerState::default(), SimulationDeltas::default())
                .await
        );

        let calls = harness.transport.calls();
        let body = calls[0].body.as_deref().unwrap_or_default();
        assert!(body.starts_with(r#"{"base_request":{"profile":"#));
        assert!(body.contains(r#""longer_by_minutes":20"#));
        let simulation = harness.manager.snapshot().simulation.unwrap();
        assert!(simulation.baseline.is_none());
        assert_eq!(simulation.delta_summary.len(), 2);
    }

    #[tokio::test]
    async fn analytics_are_fetched_as_one_action() {
        let harness = Harness::signed_in(PRIMARY);
        harness.stub_analytics(PRIMARY);

        assert!(harness.manager.load_analytics().await);

        let state = harness.manager.snapshot();
        assert_eq!(state.analytics_summary.map(|summary| summary.sessions), Some(4));
        assert_eq!(
            state.analytics_charts.map(|charts| charts.labels),
            Some(vec!["2026-03-01".to_string()])
        );
    }

    #[tokio::test]
    async fn failing_charts_leave_summary_untouched() {
        let harness = Harness::signed_in(PRIMARY);
        harness.transport.given_json(
            HttpMethod::Get,
            &url(PRIMARY, &paths::analytics_summary(30)),
            SUMMARY_BODY,
        );
        harness.transport.given(
            HttpMethod::Get,
            &url(PRIMARY, &paths::analytics_charts(30)),
            503,
            "",
        );

        assert!(!harness.manager.load_analytics().await);

        let state = harness.manager.snapshot();
        assert!(state.analytics_summary.is_none());
        assert_eq!(state.error_message, "Request failed (503)");
    }

    #[tokio::test]
    async fn planning_needs_a_session() {
        let harness = Harness::signed_out(PRIMARY);

        assert!(!harness.manager.predict(&PlannerState::default()).await);
        assert!(
            !harness
                .manager
                .simulate(&PlannerState::default(), SimulationDeltas::default())
                .await
        );
        assert!(!harness.manager.load_analytics().await);

        assert!(harness.transport.calls().is_empty());
    }
}
