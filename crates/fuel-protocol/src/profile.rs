use fuel_core::AthleteProfile;
use serde::{Deserialize, Serialize};

/// Profile as the server stores it. Any field may be missing or null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileDto {
    pub body_mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub vo2max: Option<f64>,
    pub lactate_threshold_pct: Option<f64>,
    pub gi_tolerance_score: Option<f64>,
    pub sweat_rate_l_h: Option<f64>,
    pub sodium_loss_mg_l: Option<f64>,
    pub default_temperature_c: Option<f64>,
    pub default_humidity_pct: Option<f64>,
    pub default_altitude_m: Option<f64>,
    pub default_terrain_factor: Option<f64>,
    pub weekly_training_load_hours: Option<f64>,
    pub bike_ftp_w: Option<f64>,
    pub run_ftp_w: Option<f64>,
    pub run_threshold_pace_sec_per_km: Option<f64>,
    pub bike_lt1_hr_bpm: Option<f64>,
    pub bike_lt2_hr_bpm: Option<f64>,
    pub run_lt1_hr_bpm: Option<f64>,
    pub run_lt2_hr_bpm: Option<f64>,
    pub max_carb_absorption_g_h: Option<f64>,
    pub gut_training_level: Option<f64>,
}

impl ProfileDto {
    /// The server snapshot replaces the local profile wholesale: a field the
    /// server does not know stays unknown.
    pub fn into_profile(self) -> AthleteProfile {
        AthleteProfile {
            body_mass_kg: self.body_mass_kg,
            body_fat_percent: self.body_fat_percent,
            vo2max: self.vo2max,
            lactate_threshold_pct: self.lactate_threshold_pct,
            gi_tolerance_score: self.gi_tolerance_score,
            sweat_rate_l_h: self.sweat_rate_l_h,
            sodium_loss_mg_l: self.sodium_loss_mg_l,
            default_temperature_c: self.default_temperature_c,
            default_humidity_pct: self.default_humidity_pct,
            default_altitude_m: self.default_altitude_m,
            default_terrain_factor: self.default_terrain_factor,
            weekly_training_load_hours: self.weekly_training_load_hours,
            bike_ftp_w: self.bike_ftp_w,
            run_ftp_w: self.run_ftp_w,
            run_threshold_pace_sec_per_km: self.run_threshold_pace_sec_per_km,
            bike_lt1_hr_bpm: self.bike_lt1_hr_bpm,
            bike_lt2_hr_bpm: self.bike_lt2_hr_bpm,
            run_lt1_hr_bpm: self.run_lt1_hr_bpm,
            run_lt2_hr_bpm: self.run_lt2_hr_bpm,
            max_carb_absorption_g_h: self.max_carb_absorption_g_h,
            gut_training_level: self.gut_training_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub profile: ProfileDto,
}

/// Body of `PUT /api/v1/profile`. The server merges it over its default
/// profile, so an absent field is reset to the server default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vo2max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lactate_threshold_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gi_tolerance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweat_rate_l_h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_loss_mg_l: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_humidity_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_altitude_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_terrain_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_training_load_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_indoor: Option<bool>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gut_training_level: Option<f64>,
}

impl ProfileUpdate {
    pub fn from_profile(profile: &AthleteProfile) -> Self {
        Self {
            body_mass_kg: profile.body_mass_kg,
            body_fat_percent: profile.body_fat_percent,
            vo2max: profile.vo2max,
            lactate_threshold_pct: profile.lactate_threshold_pct,
            gi_tolerance_score: profile.gi_tolerance_score,
            sweat_rate_l_h: profile.sweat_rate_l_h,
            sodium_loss_mg_l: profile.sodium_loss_mg_l,
            default_temperature_c: profile.default_temperature_c,
            default_humidity_pct: profile.default_humidity_pct,
            default_altitude_m: profile.default_altitude_m,
            default_terrain_factor: profile.default_terrain_factor,
            weekly_training_load_hours: profile.weekly_training_load_hours,
            default_indoor: None,
            bike_ftp_w: profile.bike_ftp_w,
            run_ftp_w: profile.run_ftp_w,
            run_threshold_pace_sec_per_km: profile.run_threshold_pace_sec_per_km,
            bike_lt1_hr_bpm: profile.bike_lt1_hr_bpm,
            bike_lt2_hr_bpm: profile.bike_lt2_hr_bpm,
            run_lt1_hr_bpm: profile.run_lt1_hr_bpm,
            run_lt2_hr_bpm: profile.run_lt2_hr_bpm,
            max_carb_absorption_g_h: profile.max_carb_absorption_g_h,
            gut_training_level: profile.gut_training_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_unknown() {
        let dto: ProfileDto = serde_json::from_str(r#"{"body_mass_kg": 68.5}"#).unwrap();

        let profile = dto.into_profile();

        assert_eq!(profile.body_mass_kg, Some(68.5));
        assert!(profile.vo2max.is_none());
        assert!(profile.gut_training_level.is_none());
    }

    #[test]
    fn server_snapshot_replaces_local_values_wholesale() {
        let dto = ProfileDto {
            bike_ftp_w: Some(280.0),
            ..ProfileDto::default()
        };

        let profile = dto.into_profile();

        assert_eq!(profile.bike_ftp_w, Some(280.0));
        assert!(profile.body_mass_kg.is_none());
    }

    #[test]
    fn update_body_skips_unset_fields() {
        let mut profile = AthleteProfile::default();
        profile.run_ftp_w = None;
        profile.vo2max = Some(61.0);

        let json = serde_json::to_value(ProfileUpdate::from_profile(&profile)).unwrap();

        assert_eq!(json["vo2max"], 61.0);
        assert_eq!(json["sweat_rate_l_h"], 0.8);
        assert!(json.get("run_ftp_w").is_none());
        assert!(json.get("default_indoor").is_none());
    }
}
