use anyhow::Result;
use fuel_protocol::{FuelEvent, FuelEventDraft};
use fuel_session::SessionManager;

use crate::app::{finish, require_session};
use crate::output::{format_number, print_json, tree_prefix};

pub async fn list(manager: &SessionManager, workout_id: i64, json: bool) -> Result<()> {
    require_session(manager)?;
    manager.select_workout(Some(workout_id));
    let loaded = manager.load_fuel_events().await;
    finish(manager, loaded)?;

    print_events(manager, workout_id, json)
}

pub async fn add(
    manager: &SessionManager,
    workout_id: i64,
    draft: &FuelEventDraft,
    json: bool,
) -> Result<()> {
    require_session(manager)?;
    manager.select_workout(Some(workout_id));
    let added = manager.add_fuel_event(draft).await;
    finish(manager, added)?;

    print_events(manager, workout_id, json)
}

pub async fn delete(
    manager: &SessionManager,
    workout_id: i64,
    event_id: i64,
    json: bool,
) -> Result<()> {
    require_session(manager)?;
    manager.select_workout(Some(workout_id));
    let deleted = manager.delete_fuel_event(event_id).await;
    finish(manager, deleted)?;

    print_events(manager, workout_id, json)
}

fn print_events(manager: &SessionManager, workout_id: i64, json: bool) -> Result<()> {
    let events = manager.snapshot().fuel_events;
    if json {
        return print_json(&events);
    }
    if events.is_empty() {
        println!("No fuel events for workout #{}", workout_id);
        return Ok(());
    }

    println!("\nFuel events of workout #{}:\n", workout_id);
    for (index, event) in events.iter().enumerate() {
        println!("{} {}", tree_prefix(index, events.len()), format_event(event));
    }

    let (carbs, fluid, sodium) = totals(&events);
    println!(
        "\nTotal: {} g carbs, {} ml fluid, {} mg sodium\n",
        format_number(carbs),
        format_number(fluid),
        format_number(sodium)
    );
    Ok(())
}

fn format_event(event: &FuelEvent) -> String {
    let name = event.food_name.as_deref().unwrap_or("intake");
    let mut line = format!(
        "+{:>3} min  #{:<4} {}: {} g carbs, {} ml, {} mg sodium",
        event.minute_offset,
        event.id,
        name,
        format_number(event.carbs_g),
        format_number(event.fluid_ml),
        format_number(event.sodium_mg)
    );
    if let Some(notes) = event.notes.as_deref().filter(|notes| !notes.is_empty()) {
        line.push_str(&format!(" ({})", notes));
    }
    line
}

fn totals(events: &[FuelEvent]) -> (f64, f64, f64) {
    events.iter().fold((0.0, 0.0, 0.0), |(carbs, fluid, sodium), event| {
        (
            carbs + event.carbs_g,
            fluid + event.fluid_ml,
            sodium + event.sodium_mg,
        )
    })
}
