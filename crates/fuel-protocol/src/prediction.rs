use fuel_core::{AthleteProfile, IntensityMode, PlannerState, SessionType, SimulationDeltas};
use serde::{Deserialize, Serialize};

/// Athlete block of a prediction request. Unlike `ProfileUpdate`, the server
/// requires a few of these fields, so they are filled with conservative
/// values when the profile leaves them unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub body_mass_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vo2max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lactate_threshold_pct: Option<f64>,
    pub gi_tolerance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menstrual_context: Option<String>,
    pub stress_score: f64,
    pub injury_or_illness_flag: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweat_rate_l_h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_loss_mg_l: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_ftp_w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_ftp_w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_threshold_pace_sec_per_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_lt1_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_lt2_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_lt1_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_lt2_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_carb_absorption_g_h: Option<f64>,
    pub gut_training_level: f64,
}

const FALLBACK_BODY_MASS_KG: f64 = 75.0;
const FALLBACK_GI_TOLERANCE: f64 = 5.0;
const FALLBACK_GUT_TRAINING: f64 = 6.0;
const STRESS_SCORE: f64 = 3.0;
const SLEEP_HOURS: f64 = 7.5;
const HRV_SCORE: f64 = 60.0;

impl ProfilePayload {
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        Self {
            body_mass_kg: profile.body_mass_kg.unwrap_or(FALLBACK_BODY_MASS_KG),
            body_fat_percent: profile.body_fat_percent,
            vo2max: profile.vo2max,
            lactate_threshold_pct: profile.lactate_threshold_pct,
            gi_tolerance_score: profile.gi_tolerance_score.unwrap_or(FALLBACK_GI_TOLERANCE),
            menstrual_context: None,
            stress_score: STRESS_SCORE,
            injury_or_illness_flag: false,
            sleep_hours: Some(SLEEP_HOURS),
            hrv_score: Some(HRV_SCORE),
            sweat_rate_l_h: profile.sweat_rate_l_h,
            sodium_loss_mg_l: profile.sodium_loss_mg_l,
            bike_ftp_w: profile.bike_ftp_w,
            run_ftp_w: profile.run_ftp_w,
            run_threshold_pace_sec_per_km: profile.run_threshold_pace_sec_per_km,
            bike_lt1_hr_bpm: profile.bike_lt1_hr_bpm,
            bike_lt2_hr_bpm: profile.bike_lt2_hr_bpm,
            run_lt1_hr_bpm: profile.run_lt1_hr_bpm,
            run_lt2_hr_bpm: profile.run_lt2_hr_bpm,
            max_carb_absorption_g_h: profile.max_carb_absorption_g_h,
            gut_training_level: profile.gut_training_level.unwrap_or(FALLBACK_GUT_TRAINING),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub sport: String,
    pub duration_minutes: i64,
    pub intensity_rpe: f64,
    pub indoor: bool,
    pub race_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_training_load_hours: Option<f64>,
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
    pub planned_or_completed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_iso: Option<String>,
    pub intensity_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_heart_rate_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_power_watts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pace_sec_per_km: Option<f64>,
}

impl SessionPayload {
    /// Only the metrics that make sense for the chosen sport, session type
    /// and intensity mode are sent.
    pub fn from_plan(plan: &PlannerState, profile: &AthleteProfile) -> Self {
        let completed = plan.session_type == SessionType::Completed;
        let completed_power = completed && plan.sport.supports_power();

        Self {
            sport: plan.sport.as_str().to_string(),
            duration_minutes: plan.duration_minutes as i64,
            intensity_rpe: plan.rpe,
            indoor: plan.indoor,
            race_day: plan.race_day,
            weekly_training_load_hours: profile.weekly_training_load_hours,
            avg_heart_rate_bpm: completed.then_some(plan.avg_hr),
            max_heart_rate_bpm: completed.then_some(plan.max_hr),
            avg_power_watts: completed_power.then_some(plan.avg_power),
            normalized_power_watts: completed_power.then_some(plan.norm_power),
            avg_cadence: None,
            distance_km: Some(plan.distance_km),
            elevation_gain_m: Some(plan.elevation_m),
            planned_or_completed: plan.session_type.as_str().to_string(),
            planned_start_iso: None,
            intensity_mode: plan.intensity_mode.as_str().to_string(),
            target_heart_rate_bpm: (plan.intensity_mode == IntensityMode::Hr)
                .then_some(plan.target_hr),
            target_power_watts: (plan.intensity_mode == IntensityMode::Power
                && plan.sport.supports_power())
            .then_some(plan.target_power),
            target_pace_sec_per_km: (plan.intensity_mode == IntensityMode::Pace
                && plan.sport.supports_pace())
            .then_some(plan.target_pace),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentPayload {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub altitude_m: f64,
    pub terrain_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequestBody {
    pub profile: ProfilePayload,
    pub session: SessionPayload,
    pub environment: EnvironmentPayload,
    pub science_mode: bool,
    pub selected_food_ids: Vec<i64>,
}

impl PredictionRequestBody {
    pub fn from_plan(plan: &PlannerState, profile: &AthleteProfile) -> Self {
        Self {
            profile: ProfilePayload::from_profile(profile),
            session: SessionPayload::from_plan(plan, profile),
            environment: EnvironmentPayload {
                temperature_c: plan.temperature_c,
                humidity_pct: plan.humidity_pct,
                altitude_m: plan.altitude_m,
                terrain_factor: plan.terrain_factor,
            },
            science_mode: plan.science_mode_strict,
            selected_food_ids: plan.selected_food_ids.clone(),
        }
    }
}

/// One named fueling recommendation, e.g. "balanced".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub strategy: String,
    pub carbs_g_per_hour: f64,
    pub hydration_ml_per_hour: f64,
    pub sodium_mg_per_hour: f64,
    pub pre_workout_carbs_g: f64,
    pub during_workout_carbs_g_total: f64,
    pub post_workout_carbs_g: f64,
    pub gi_risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingAction {
    pub minute_offset: i64,
    pub action: String,
    pub food_name: String,
    pub serving: String,
    pub carbs_g: f64,
    pub sodium_mg: f64,
    pub fluid_ml: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub recommendation_id: String,
    pub strategies: Vec<Strategy>,
    pub confidence_low: f64,
    pub confidence_high: f64,
    #[serde(default)]
    pub uncertainty_notes: Vec<String>,
    #[serde(default)]
    pub rationale: Vec<String>,
    #[serde(default)]
    pub fueling_schedule: Vec<FuelingAction>,
}

/// A what-if run: the base prediction plus server-side deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequestBody {
    pub base_request: PredictionRequestBody,
    pub hotter_by_c: f64,
    pub longer_by_minutes: i64,
    pub intensity_delta_rpe: f64,
}

impl SimulationRequestBody {
    pub fn new(base_request: PredictionRequestBody, deltas: SimulationDeltas) -> Self {
        Self {
            base_request,
            hotter_by_c: deltas.hotter_by_c,
            longer_by_minutes: deltas.longer_by_minutes,
            intensity_delta_rpe: deltas.intensity_delta_rpe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    #[serde(default)]
    pub baseline: Option<PredictionResponse>,
    pub simulated: PredictionResponse,
    #[serde(default)]
    pub delta_summary: Vec<String>,
}
