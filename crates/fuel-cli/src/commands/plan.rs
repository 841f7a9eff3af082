use anyhow::Result;
use clap::Args;
use fuel_core::{
    AthleteProfile, IntensityMode, PlannerState, SessionType, SimulationDeltas, SportOption,
};
use fuel_protocol::{PredictionResponse, Strategy};
use fuel_session::SessionManager;

use crate::app::{finish, require_session};
use crate::output::{format_number, print_json, tree_prefix};

/// Session and environment of a prediction. Anything left out comes from the
/// athlete profile's defaults, then from the planner baseline.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[arg(long, default_value = "running")]
    pub sport: SportOption,
    #[arg(long = "type", default_value = "planned")]
    pub session_type: SessionType,
    /// Minutes
    #[arg(long)]
    pub duration: Option<f64>,
    #[arg(long)]
    pub rpe: Option<f64>,
    #[arg(long)]
    pub indoor: bool,
    #[arg(long)]
    pub race_day: bool,
    #[arg(long, default_value = "hr")]
    pub mode: IntensityMode,
    #[arg(long)]
    pub target_hr: Option<f64>,
    #[arg(long)]
    pub avg_hr: Option<f64>,
    #[arg(long)]
    pub max_hr: Option<f64>,
    /// Seconds per km
    #[arg(long)]
    pub target_pace: Option<f64>,
    #[arg(long)]
    pub target_power: Option<f64>,
    #[arg(long)]
    pub avg_power: Option<f64>,
    #[arg(long)]
    pub norm_power: Option<f64>,
    #[arg(long)]
    pub distance: Option<f64>,
    #[arg(long)]
    pub elevation: Option<f64>,
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub humidity: Option<f64>,
    #[arg(long)]
    pub altitude: Option<f64>,
    #[arg(long)]
    pub terrain: Option<f64>,
    /// Only evidence-graded recommendations
    #[arg(long)]
    pub strict: bool,
    /// Food ids to build the schedule from, comma separated
    #[arg(long, value_delimiter = ',')]
    pub foods: Vec<i64>,
}

impl PlanArgs {
    pub fn to_plan(&self, profile: &AthleteProfile) -> PlannerState {
        let baseline = PlannerState::default();
        PlannerState {
            sport: self.sport,
            session_type: self.session_type,
            duration_minutes: self.duration.unwrap_or(baseline.duration_minutes),
            rpe: self.rpe.unwrap_or(baseline.rpe),
            indoor: self.indoor,
            race_day: self.race_day,
            intensity_mode: self.mode,
            target_hr: self.target_hr.unwrap_or(baseline.target_hr),
            avg_hr: self.avg_hr.unwrap_or(baseline.avg_hr),
            max_hr: self.max_hr.unwrap_or(baseline.max_hr),
            target_pace: self
                .target_pace
                .or(profile.run_threshold_pace_sec_per_km)
                .unwrap_or(baseline.target_pace),
            target_power: self.target_power.unwrap_or(baseline.target_power),
            avg_power: self.avg_power.unwrap_or(baseline.avg_power),
            norm_power: self.norm_power.unwrap_or(baseline.norm_power),
            distance_km: self.distance.unwrap_or(baseline.distance_km),
            elevation_m: self.elevation.unwrap_or(baseline.elevation_m),
            temperature_c: self
                .temperature
                .or(profile.default_temperature_c)
                .unwrap_or(baseline.temperature_c),
            humidity_pct: self
                .humidity
                .or(profile.default_humidity_pct)
                .unwrap_or(baseline.humidity_pct),
            altitude_m: self
                .altitude
                .or(profile.default_altitude_m)
                .unwrap_or(baseline.altitude_m),
            terrain_factor: self
                .terrain
                .or(profile.default_terrain_factor)
                .unwrap_or(baseline.terrain_factor),
            science_mode_strict: self.strict,
            selected_food_ids: self.foods.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Degrees Celsius added to the temperature
    #[arg(long, default_value_t = 5.0)]
    pub hotter: f64,
    /// Minutes added to the duration
    #[arg(long, default_value_t = 20)]
    pub longer: i64,
    /// RPE points added to the intensity
    #[arg(long, default_value_t = 0.7, allow_negative_numbers = true)]
    pub harder: f64,
}

impl From<&SimulationArgs> for SimulationDeltas {
    fn from(args: &SimulationArgs) -> Self {
        SimulationDeltas {
            hotter_by_c: args.hotter,
            longer_by_minutes: args.longer,
            intensity_delta_rpe: args.harder,
        }
    }
}

pub async fn predict(manager: &SessionManager, args: &PlanArgs, json: bool) -> Result<()> {
    let plan = prepare(manager, args).await?;
    let predicted = manager.predict(&plan).await;
    finish(manager, predicted)?;

    let Some(prediction) = manager.snapshot().prediction else {
        return finish(manager, false);
    };
    if json {
        return print_json(&prediction);
    }

    print_prediction(&prediction);
    Ok(())
}

pub async fn simulate(
    manager: &SessionManager,
    args: &PlanArgs,
    deltas: &SimulationArgs,
    json: bool,
) -> Result<()> {
    let plan = prepare(manager, args).await?;
    let simulated = manager.simulate(&plan, deltas.into()).await;
    finish(manager, simulated)?;

    let Some(simulation) = manager.snapshot().simulation else {
        return finish(manager, false);
    };
    if json {
        return print_json(&simulation);
    }

    println!(
        "\nWhat if: +{}°C, +{} min, {:+} RPE",
        format_number(deltas.hotter),
        deltas.longer,
        deltas.harder
    );
    for line in &simulation.delta_summary {
        println!("   {}", line);
    }
    print_prediction(&simulation.simulated);
    Ok(())
}

/// Predictions use the server copy of the profile, so it is refreshed first.
async fn prepare(manager: &SessionManager, args: &PlanArgs) -> Result<PlannerState> {
    require_session(manager)?;
    let refreshed = manager.refresh_me().await;
    finish(manager, refreshed)?;
    Ok(args.to_plan(&manager.snapshot().profile))
}

fn print_prediction(prediction: &PredictionResponse) {
    println!(
        "\nConfidence: {:.0}% to {:.0}%\n",
        prediction.confidence_low * 100.0,
        prediction.confidence_high * 100.0
    );

    for strategy in &prediction.strategies {
        println!("{}", format_strategy(strategy));
    }

    if !prediction.fueling_schedule.is_empty() {
        println!("\nSchedule:");
        let count = prediction.fueling_schedule.len();
        for (index, action) in prediction.fueling_schedule.iter().enumerate() {
            println!(
                "{} +{:>3} min  {} {} ({}): {} g carbs, {} ml, {} mg sodium",
                tree_prefix(index, count),
                action.minute_offset,
                action.action,
                action.food_name,
                action.serving,
                format_number(action.carbs_g),
                format_number(action.fluid_ml),
                format_number(action.sodium_mg)
            );
        }
    }

    for (title, lines) in [
        ("Why", &prediction.rationale),
        ("Uncertainty", &prediction.uncertainty_notes),
    ] {
        if !lines.is_empty() {
            println!("\n{}:", title);
            for line in lines {
                println!("   - {}", line);
            }
        }
    }
    println!();
}

fn format_strategy(strategy: &Strategy) -> String {
    format!(
        "{:12} {} g/h carbs, {} ml/h fluid, {} mg/h sodium (pre {} g, during {} g, post {} g, GI risk {})",
        strategy.strategy,
        format_number(strategy.carbs_g_per_hour),
        format_number(strategy.hydration_ml_per_hour),
        format_number(strategy.sodium_mg_per_hour),
        format_number(strategy.pre_workout_carbs_g),
        format_number(strategy.during_workout_carbs_g_total),
        format_number(strategy.post_workout_carbs_g),
        format_number(strategy.gi_risk_score)
    )
}
