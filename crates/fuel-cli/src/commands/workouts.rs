use anyhow::Result;
use fuel_protocol::{Workout, WorkoutCreate};
use fuel_session::SessionManager;

use crate::app::{finish, require_session};
use crate::output::{format_minutes, format_number, format_timestamp, print_json, tree_prefix};

pub async fn list(manager: &SessionManager, json: bool) -> Result<()> {
    require_session(manager)?;
    let loaded = manager.load_workouts().await;
    finish(manager, loaded)?;

    let workouts = manager.snapshot().workouts;
    if json {
        return print_json(&workouts);
    }
    if workouts.is_empty() {
        println!("No workouts yet. Log one with `fuel workouts create <sport>`.");
        return Ok(());
    }

    println!("\nWorkouts:\n");
    for (index, workout) in workouts.iter().enumerate() {
        println!("{} {}", tree_prefix(index, workouts.len()), format_workout(workout));
    }
    println!();
    Ok(())
}

pub async fn create(manager: &SessionManager, workout: &WorkoutCreate) -> Result<()> {
    require_session(manager)?;
    let created = manager.create_workout(workout).await;
    finish(manager, created)?;

    println!("✅ Workout logged: {} ({})", workout.sport, workout.status);
    Ok(())
}

pub async fn totals(
    manager: &SessionManager,
    workout_id: i64,
    carbs_g: f64,
    fluids_ml: f64,
    sodium_mg: f64,
    notes: &str,
) -> Result<()> {
    require_session(manager)?;
    manager.select_workout(Some(workout_id));
    let saved = manager
        .save_workout_totals(carbs_g, fluids_ml, sodium_mg, notes)
        .await;
    finish(manager, saved)?;

    match manager.snapshot().selected_workout() {
        Some(workout) => println!("✅ {}", format_workout(workout)),
        None => println!("✅ Totals saved for workout #{}", workout_id),
    }
    Ok(())
}

fn format_workout(workout: &Workout) -> String {
    let mut parts = vec![format!("#{:<4}", workout.id)];
    if let Some(start_time) = &workout.start_time {
        parts.push(format_timestamp(start_time));
    }
    parts.push(format!("{} {}", workout.sport, workout.status));
    if let Some(duration) = workout.duration_minutes {
        parts.push(format_minutes(duration));
    }
    if let Some(distance) = workout.distance_km {
        parts.push(format!("{} km", format_number(distance)));
    }
    if let Some(carbs) = workout.completed_carbs_g {
        parts.push(format!("{} g carbs taken", format_number(carbs)));
    }
    if workout.source != "manual" {
        parts.push(format!("via {}", workout.source));
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout() -> Workout {
        Workout {
            id: 7,
            source: "manual".to_string(),
            external_id: None,
            sport: "cycling".to_string(),
            status: "completed".to_string(),
            start_time: Some("2026-03-02T07:30:00Z".to_string()),
            duration_minutes: Some(120.0),
            intensity_rpe: None,
            avg_heart_rate_bpm: None,
            max_heart_rate_bpm: None,
            avg_power_watts: None,
            normalized_power_watts: None,
            avg_cadence: None,
            distance_km: Some(61.5),
            elevation_gain_m: None,
            tss: None,
            completed_carbs_g: Some(90.0),
            completed_fluids_ml: None,
            completed_sodium_mg: None,
            temperature_c: None,
            humidity_pct: None,
            notes: None,
        }
    }

    #[test]
    fn format_workout_shows_known_fields() {
        assert_eq!(
            format_workout(&workout()),
            "#7     2026-03-02 07:30  cycling completed  2h 00min  61.5 km  90 g carbs taken"
        );
    }

    #[test]
    fn format_workout_names_sync_source() {
        let synced = Workout {
            source: "strava".to_string(),
            start_time: None,
            duration_minutes: None,
            distance_km: None,
            completed_carbs_g: None,
            ..workout()
        };

        assert_eq!(format_workout(&synced), "#7     cycling completed  via strava");
    }
}
