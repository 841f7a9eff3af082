use fuel_protocol::{paths, FoodDraft, FoodEnvelope, FoodsEnvelope};

use super::SessionManager;

impl SessionManager {
    /// Built-in and user foods, replacing whatever was held before.
    pub async fn load_foods(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let envelope: FoodsEnvelope = self.get(paths::FOODS_ALL).await?;
            self.update(|state| state.foods = envelope.items);
            Ok(())
        })
        .await
    }

    pub async fn add_food(&self, draft: &FoodDraft) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let envelope: FoodEnvelope = self.post(paths::FOODS, draft).await?;
            self.update(|state| state.foods.push(envelope.item));
            Ok(())
        })
        .await
    }

    pub async fn delete_food(&self, food_id: i64) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            self.delete(&paths::food(food_id)).await?;
            self.update(|state| state.foods.retain(|food| food.id != food_id));
            Ok(())
        })
        .await
    }
}
