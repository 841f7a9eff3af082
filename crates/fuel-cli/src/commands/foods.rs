use anyhow::Result;
use fuel_protocol::{FoodDraft, FoodItem};
use fuel_session::SessionManager;

use crate::app::{finish, require_session};
use crate::output::{format_number, print_json, tree_prefix};

pub async fn list(manager: &SessionManager, json: bool) -> Result<()> {
    require_session(manager)?;
    let loaded = manager.load_foods().await;
    finish(manager, loaded)?;

    let foods = manager.snapshot().foods;
    if json {
        return print_json(&foods);
    }
    if foods.is_empty() {
        println!("No foods yet");
        return Ok(());
    }

    println!("\nFoods:\n");
    for (index, food) in foods.iter().enumerate() {
        println!("{} {}", tree_prefix(index, foods.len()), format_food(food));
    }
    println!();
    Ok(())
}

pub async fn add(manager: &SessionManager, draft: &FoodDraft) -> Result<()> {
    require_session(manager)?;
    let added = manager.add_food(draft).await;
    finish(manager, added)?;

    if let Some(food) = manager.snapshot().foods.last() {
        println!("✅ Added #{} {}", food.id, food.name);
    }
    Ok(())
}

pub async fn delete(manager: &SessionManager, food_id: i64) -> Result<()> {
    require_session(manager)?;
    let deleted = manager.delete_food(food_id).await;
    finish(manager, deleted)?;

    println!("🗑️  Deleted food #{}", food_id);
    Ok(())
}

fn format_food(food: &FoodItem) -> String {
    let origin = if food.is_builtin { "" } else { " (custom)" };
    let mut line = format!(
        "#{:<4} {}{} [{}], {}: {} g carbs, {} mg sodium, {} ml fluid",
        food.id,
        food.name,
        origin,
        food.category,
        food.serving_desc,
        format_number(food.carbs_g),
        format_number(food.sodium_mg),
        format_number(food.fluid_ml)
    );
    if food.caffeine_mg > 0.0 {
        line.push_str(&format!(", {} mg caffeine", format_number(food.caffeine_mg)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gel() -> FoodItem {
        FoodItem {
            id: 3,
            name: "Gel".to_string(),
            category: "gel".to_string(),
            serving_desc: "1 sachet".to_string(),
            carbs_g: 25.0,
            sodium_mg: 50.0,
            fluid_ml: 0.0,
            caffeine_mg: 0.0,
            is_builtin: true,
        }
    }

    #[test]
    fn format_food_lists_nutrients_per_serving() {
        assert_eq!(
            format_food(&gel()),
            "#3    Gel [gel], 1 sachet: 25 g carbs, 50 mg sodium, 0 ml fluid"
        );
    }

    #[test]
    fn format_food_marks_custom_caffeinated_items() {
        let food = FoodItem {
            is_builtin: false,
            caffeine_mg: 75.0,
            ..gel()
        };

        let line = format_food(&food);

        assert!(line.contains("Gel (custom)"));
        assert!(line.ends_with(", 75 mg caffeine"));
    }
}
