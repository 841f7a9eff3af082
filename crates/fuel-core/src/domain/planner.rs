use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOptionError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SportOption {
    #[default]
    Running,
    Cycling,
    Swimming,
    Hiking,
    TrailRunning,
    Gym,
    Hiit,
    Hyrox,
}

impl SportOption {
    pub const ALL: [SportOption; 8] = [
        SportOption::Running,
        SportOption::Cycling,
        SportOption::Swimming,
        SportOption::Hiking,
        SportOption::TrailRunning,
        SportOption::Gym,
        SportOption::Hiit,
        SportOption::Hyrox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportOption::Running => "running",
            SportOption::Cycling => "cycling",
            SportOption::Swimming => "swimming",
            SportOption::Hiking => "hiking",
            SportOption::TrailRunning => "trail_running",
            SportOption::Gym => "gym",
            SportOption::Hiit => "hiit",
            SportOption::Hyrox => "hyrox",
        }
    }

    pub fn supports_power(&self) -> bool {
        matches!(self, SportOption::Cycling | SportOption::Hyrox)
    }

    pub fn supports_pace(&self) -> bool {
        matches!(
            self,
            SportOption::Running | SportOption::TrailRunning | SportOption::Hiking
        )
    }
}

impl FromStr for SportOption {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        SportOption::ALL
            .into_iter()
            .find(|sport| sport.as_str() == normalized)
            .ok_or_else(|| UnknownOptionError {
                kind: "sport",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for SportOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionType {
    #[default]
    Planned,
    Completed,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Planned => "planned",
            SessionType::Completed => "completed",
        }
    }
}

impl FromStr for SessionType {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "planned" => Ok(SessionType::Planned),
            "completed" => Ok(SessionType::Completed),
            _ => Err(UnknownOptionError {
                kind: "session type",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntensityMode {
    Rpe,
    #[default]
    Hr,
    Pace,
    Power,
}

impl IntensityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityMode::Rpe => "rpe",
            IntensityMode::Hr => "hr",
            IntensityMode::Pace => "pace",
            IntensityMode::Power => "power",
        }
    }
}

impl FromStr for IntensityMode {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "rpe" => Ok(IntensityMode::Rpe),
            "hr" => Ok(IntensityMode::Hr),
            "pace" => Ok(IntensityMode::Pace),
            "power" => Ok(IntensityMode::Power),
            _ => Err(UnknownOptionError {
                kind: "intensity mode",
                value: value.to_string(),
            }),
        }
    }
}

/// Session and environment inputs of one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    pub sport: SportOption,
    pub session_type: SessionType,
    pub duration_minutes: f64,
    pub rpe: f64,
    pub indoor: bool,
    pub race_day: bool,

    pub intensity_mode: IntensityMode,
    pub target_hr: f64,
    pub avg_hr: f64,
    pub max_hr: f64,
    pub target_pace: f64,
    pub target_power: f64,
    pub avg_power: f64,
    pub norm_power: f64,

    pub distance_km: f64,
    pub elevation_m: f64,

    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub altitude_m: f64,
    pub terrain_factor: f64,

    pub science_mode_strict: bool,
    pub selected_food_ids: Vec<i64>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            sport: SportOption::Running,
            session_type: SessionType::Planned,
            duration_minutes: 90.0,
            rpe: 5.0,
            indoor: false,
            race_day: false,
            intensity_mode: IntensityMode::Hr,
            target_hr: 145.0,
            avg_hr: 145.0,
            max_hr: 185.0,
            target_pace: 320.0,
            target_power: 250.0,
            avg_power: 245.0,
            norm_power: 260.0,
            distance_km: 18.0,
            elevation_m: 200.0,
            temperature_c: 18.0,
            humidity_pct: 55.0,
            altitude_m: 100.0,
            terrain_factor: 1.0,
            science_mode_strict: false,
            selected_food_ids: Vec::new(),
        }
    }
}

impl PlannerState {
    pub fn supported_intensity_modes(&self) -> Vec<IntensityMode> {
        let mut modes = vec![IntensityMode::Rpe, IntensityMode::Hr];
        if self.sport.supports_pace() {
            modes.push(IntensityMode::Pace);
        }
        if self.sport.supports_power() {
            modes.push(IntensityMode::Power);
        }
        modes
    }

    pub fn is_completed(&self) -> bool {
        self.session_type == SessionType::Completed
    }

    pub fn shows_heart_rate(&self) -> bool {
        self.intensity_mode == IntensityMode::Hr || self.is_completed()
    }

    pub fn shows_pace(&self) -> bool {
        self.intensity_mode == IntensityMode::Pace && self.sport.supports_pace()
    }

    pub fn shows_power(&self) -> bool {
        self.sport.supports_power()
            && (self.intensity_mode == IntensityMode::Power || self.is_completed())
    }
}

/// What-if adjustments applied server-side to a base prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationDeltas {
    pub hotter_by_c: f64,
    pub longer_by_minutes: i64,
    pub intensity_delta_rpe: f64,
}

impl Default for SimulationDeltas {
    fn default() -> Self {
        Self {
            hotter_by_c: 5.0,
            longer_by_minutes: 20,
            intensity_delta_rpe: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_parsing_accepts_dashes_and_case() {
        assert_eq!("Trail-Running".parse::<SportOption>(), Ok(SportOption::TrailRunning));
        assert_eq!("cycling".parse::<SportOption>(), Ok(SportOption::Cycling));
        assert!("curling".parse::<SportOption>().is_err());
    }

    #[test]
    fn running_offers_pace_but_not_power() {
        let plan = PlannerState::default();

        assert_eq!(
            plan.supported_intensity_modes(),
            vec![IntensityMode::Rpe, IntensityMode::Hr, IntensityMode::Pace]
        );
    }

    #[test]
    fn cycling_offers_power_but_not_pace() {
        let plan = PlannerState {
            sport: SportOption::Cycling,
            ..PlannerState::default()
        };

        assert_eq!(
            plan.supported_intensity_modes(),
            vec![IntensityMode::Rpe, IntensityMode::Hr, IntensityMode::Power]
        );
    }

    #[test]
    fn completed_sessions_show_heart_rate_and_power() {
        let plan = PlannerState {
            sport: SportOption::Hyrox,
            session_type: SessionType::Completed,
            intensity_mode: IntensityMode::Rpe,
            ..PlannerState::default()
        };

        assert!(plan.shows_heart_rate());
        assert!(plan.shows_power());
        assert!(!plan.shows_pace());
    }

    #[test]
    fn default_simulation_deltas() {
        let deltas = SimulationDeltas::default();

        assert_eq!(deltas.hotter_by_c, 5.0);
        assert_eq!(deltas.longer_by_minutes, 20);
        assert_eq!(deltas.intensity_delta_rpe, 0.7);
    }
}
