use serde::{Deserialize, Serialize};

/// Aggregates over completed workouts of the requested window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSummary {
    pub sessions: i64,
    pub avg_duration_minutes: f64,
    pub avg_heart_rate_bpm: f64,
    pub avg_power_watts: f64,
    pub avg_rpe: f64,
    pub total_distance_km: f64,
    pub total_carbs_g: f64,
}

/// Per-day series. All vectors are aligned on `labels`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsCharts {
    pub labels: Vec<String>,
    pub avg_hr: Vec<f64>,
    pub avg_power: Vec<f64>,
    pub total_minutes: Vec<f64>,
    pub carbs_g: Vec<f64>,
    pub distance_km: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummaryEnvelope {
    pub summary: AnalyticsSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsChartsEnvelope {
    pub charts: AnalyticsCharts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_summary_decodes() {
        let envelope: AnalyticsSummaryEnvelope =
            serde_json::from_str(r#"{"summary": {"sessions": 0}}"#).unwrap();

        assert_eq!(envelope.summary, AnalyticsSummary::default());
    }

    #[test]
    fn decodes_chart_series() {
        let json = r#"{"charts": {
            "labels": ["2026-03-01", "2026-03-02"],
            "avg_hr": [141.5, 150.0],
            "avg_power": [0, 231.2],
            "total_minutes": [60, 95],
            "carbs_g": [40, 110],
            "distance_km": [12.1, 38.4]
        }}"#;

        let envelope: AnalyticsChartsEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.charts.labels.len(), 2);
        assert_eq!(envelope.charts.avg_power[1], 231.2);
    }
}
