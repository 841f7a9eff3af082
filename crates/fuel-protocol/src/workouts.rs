use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub source: String,
    #[serde(default)]
    pub external_id: Option<String>,
    pub sport: String,
    pub status: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub intensity_rpe: Option<f64>,
    #[serde(default)]
    pub avg_heart_rate_bpm: Option<f64>,
    #[serde(default)]
    pub max_heart_rate_bpm: Option<f64>,
    #[serde(default)]
    pub avg_power_watts: Option<f64>,
    #[serde(default)]
    pub normalized_power_watts: Option<f64>,
    #[serde(default)]
    pub avg_cadence: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub elevation_gain_m: Option<f64>,
    #[serde(default)]
    pub tss: Option<f64>,
    #[serde(default)]
    pub completed_carbs_g: Option<f64>,
    #[serde(default)]
    pub completed_fluids_ml: Option<f64>,
    #[serde(default)]
    pub completed_sodium_mg: Option<f64>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /api/v1/workouts` for a manually logged session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCreate {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub sport: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_rpe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_power_watts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_power_watts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutCreate {
    pub fn manual(sport: &str, status: &str) -> Self {
        Self {
            source: "manual".to_string(),
            external_id: None,
            sport: sport.to_string(),
            status: status.to_string(),
            start_time: None,
            duration_minutes: None,
            intensity_rpe: None,
            avg_heart_rate_bpm: None,
            max_heart_rate_bpm: None,
            avg_power_watts: None,
            normalized_power_watts: None,
            distance_km: None,
            elevation_gain_m: None,
            notes: None,
        }
    }
}

/// Partial update: only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_rpe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_power_watts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_power_watts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cadence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_carbs_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_fluids_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_sodium_mg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl WorkoutUpdate {
    /// Intake actually consumed during the workout. Blank notes are not sent.
    pub fn totals(carbs_g: f64, fluids_ml: f64, sodium_mg: f64, notes: &str) -> Self {
        Self {
            completed_carbs_g: Some(carbs_g),
            completed_fluids_ml: Some(fluids_ml),
            completed_sodium_mg: Some(sodium_mg),
            notes: (!notes.trim().is_empty()).then(|| notes.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutsEnvelope {
    pub items: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEnvelope {
    pub item: Workout,
}

/// An intake logged against a workout at a minute offset from its start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEvent {
    pub id: i64,
    pub workout_id: i64,
    pub minute_offset: i64,
    #[serde(default)]
    pub event_time_iso: Option<String>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fluid_ml: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelEventDraft {
    pub minute_offset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    pub carbs_g: f64,
    pub fluid_ml: f64,
    pub sodium_mg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEventsEnvelope {
    pub items: Vec<FuelEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEventEnvelope {
    pub item: FuelEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_update_sends_only_intake_fields() {
        let json = serde_json::to_value(WorkoutUpdate::totals(90.0, 1200.0, 800.0, "")).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["completed_carbs_g"], 90.0);
        assert!(object.get("notes").is_none());
    }

    #[test]
    fn totals_update_keeps_non_blank_notes() {
        let update = WorkoutUpdate::totals(60.0, 500.0, 300.0, "felt good");

        assert_eq!(update.notes.as_deref(), Some("felt good"));
    }

    #[test]
    fn decodes_sparse_synced_workout() {
        let json = r#"{"id": 5, "source": "strava", "external_id": "998", "sport": "cycling",
                       "status": "completed", "start_time": "2026-03-02T07:30:00Z",
                       "duration_minutes": 95.0, "tss": null}"#;

        let workout: Workout = serde_json::from_str(json).unwrap();

        assert_eq!(workout.external_id.as_deref(), Some("998"));
        assert_eq!(workout.duration_minutes, Some(95.0));
        assert!(workout.tss.is_none());
        assert!(workout.notes.is_none());
    }

    #[test]
    fn manual_workout_defaults_source() {
        let json = serde_json::to_value(WorkoutCreate::manual("running", "planned")).unwrap();

        assert_eq!(json["source"], "manual");
        assert_eq!(json["status"], "planned");
        assert!(json.get("external_id").is_none());
    }
}
