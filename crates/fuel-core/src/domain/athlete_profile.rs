use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProfileFieldError {
    #[error("unknown profile field: {name}")]
    UnknownField { name: String },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: f64 },
}

/// Physiological and training parameters of the signed-in athlete.
///
/// Every field is optional. `Default` carries the sport-science baseline the
/// client starts from before the server has sent anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
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

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            body_mass_kg: Some(75.0),
            body_fat_percent: Some(12.0),
            vo2max: Some(55.0),
            lactate_threshold_pct: Some(86.0),
            gi_tolerance_score: Some(6.0),
            sweat_rate_l_h: Some(0.8),
            sodium_loss_mg_l: Some(900.0),
            default_temperature_c: Some(18.0),
            default_humidity_pct: Some(55.0),
            default_altitude_m: Some(100.0),
            default_terrain_factor: Some(1.0),
            weekly_training_load_hours: Some(12.0),
            bike_ftp_w: Some(300.0),
            run_ftp_w: None,
            run_threshold_pace_sec_per_km: Some(255.0),
            bike_lt1_hr_bpm: Some(140.0),
            bike_lt2_hr_bpm: Some(170.0),
            run_lt1_hr_bpm: Some(145.0),
            run_lt2_hr_bpm: Some(176.0),
            max_carb_absorption_g_h: Some(100.0),
            gut_training_level: Some(7.0),
        }
    }
}

impl AthleteProfile {
    pub const FIELD_NAMES: [&'static str; 21] = [
        "body_mass_kg",
        "body_fat_percent",
        "vo2max",
        "lactate_threshold_pct",
        "gi_tolerance_score",
        "sweat_rate_l_h",
        "sodium_loss_mg_l",
        "default_temperature_c",
        "default_humidity_pct",
        "default_altitude_m",
        "default_terrain_factor",
        "weekly_training_load_hours",
        "bike_ftp_w",
        "run_ftp_w",
        "run_threshold_pace_sec_per_km",
        "bike_lt1_hr_bpm",
        "bike_lt2_hr_bpm",
        "run_lt1_hr_bpm",
        "run_lt2_hr_bpm",
        "max_carb_absorption_g_h",
        "gut_training_level",
    ];

    /// Field name and value pairs in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, Option<f64>)> {
        let values = serde_json::to_value(self).unwrap_or(Value::Null);
        Self::FIELD_NAMES
            .iter()
            .map(|name| (*name, values.get(name).and_then(Value::as_f64)))
            .collect()
    }

    /// Returns a copy with one field replaced. `None` clears the field.
    pub fn with_field(&self, name: &str, value: Option<f64>) -> Result<Self, ProfileFieldError> {
        if !Self::FIELD_NAMES.contains(&name) {
            return Err(ProfileFieldError::UnknownField {
                name: name.to_string(),
            });
        }

        let json_value = match value {
            Some(number) => serde_json::Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| ProfileFieldError::InvalidValue {
                    name: name.to_string(),
                    value: number,
                })?,
            None => Value::Null,
        };

        let mut values = serde_json::to_value(self).map_err(|_| ProfileFieldError::UnknownField {
            name: name.to_string(),
        })?;
        if let Value::Object(map) = &mut values {
            map.insert(name.to_string(), json_value);
        }

        serde_json::from_value(values).map_err(|_| ProfileFieldError::UnknownField {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_uses_baseline_values() {
        let profile = AthleteProfile::default();

        assert_eq!(profile.body_mass_kg, Some(75.0));
        assert_eq!(profile.sweat_rate_l_h, Some(0.8));
        assert_eq!(profile.max_carb_absorption_g_h, Some(100.0));
        assert!(profile.run_ftp_w.is_none());
    }

    #[test]
    fn fields_lists_every_field_in_order() {
        let fields = AthleteProfile::default().fields();

        assert_eq!(fields.len(), 21);
        assert_eq!(fields[0], ("body_mass_kg", Some(75.0)));
        assert_eq!(fields[13], ("run_ftp_w", None));
        assert_eq!(fields[20], ("gut_training_level", Some(7.0)));
    }

    #[test]
    fn with_field_replaces_a_single_value() {
        let profile = AthleteProfile::default();

        let updated = profile.with_field("bike_ftp_w", Some(320.0)).unwrap();

        assert_eq!(updated.bike_ftp_w, Some(320.0));
        assert_eq!(updated.body_mass_kg, profile.body_mass_kg);
    }

    #[test]
    fn with_field_can_clear_a_value() {
        let updated = AthleteProfile::default().with_field("vo2max", None).unwrap();

        assert!(updated.vo2max.is_none());
    }

    #[test]
    fn with_field_rejects_unknown_names() {
        let result = AthleteProfile::default().with_field("shoe_size", Some(44.0));

        assert_eq!(
            result,
            Err(ProfileFieldError::UnknownField {
                name: "shoe_size".to_string()
            })
        );
    }

    #[test]
    fn with_field_rejects_non_finite_values() {
        let result = AthleteProfile::default().with_field("vo2max", Some(f64::NAN));

        assert!(matches!(result, Err(ProfileFieldError::InvalidValue { .. })));
    }
}
