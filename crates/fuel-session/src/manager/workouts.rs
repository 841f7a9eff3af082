use fuel_protocol::{
    paths, FuelEventDraft, FuelEventEnvelope, FuelEventsEnvelope, WorkoutCreate, WorkoutEnvelope,
    WorkoutUpdate, WorkoutsEnvelope,
};

use super::SessionManager;

impl SessionManager {
    /// Most recent workouts first. Selects the first one when nothing is
    /// selected yet.
    pub async fn load_workouts(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let path = paths::workouts(self.settings.workout_limit);
            let envelope: WorkoutsEnvelope = self.get(&path).await?;
            self.update(|state| {
                state.workouts = envelope.items;
                if state.selected_workout_id.is_none() {
                    state.selected_workout_id = state.workouts.first().map(|workout| workout.id);
                }
            });
            Ok(())
        })
        .await
    }

    pub async fn create_workout(&self, workout: &WorkoutCreate) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let created = self
            .run_request(async {
                let _: WorkoutEnvelope = self.post(paths::WORKOUTS, workout).await?;
                Ok(())
            })
            .await;

        if created {
            self.load_workouts().await;
        }
        created
    }

    /// Fuel events of the previous selection are dropped immediately.
    pub fn select_workout(&self, workout_id: Option<i64>) {
        self.update(|state| {
            if state.selected_workout_id != workout_id {
                state.fuel_events.clear();
            }
            state.selected_workout_id = workout_id;
        });
    }

    fn selected_workout_id(&self) -> Option<i64> {
        self.state.borrow().selected_workout_id
    }

    /// Events of the selected workout, ordered by minute offset. Workouts are
    /// reloaded afterwards since their totals follow the events.
    pub async fn load_fuel_events(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let Some(workout_id) = self.selected_workout_id() else {
            return false;
        };

        let loaded = self
            .run_request(async {
                let envelope: FuelEventsEnvelope = self.get(&paths::fueling(workout_id)).await?;
                let mut events = envelope.items;
                events.sort_by_key(|event| event.minute_offset);
                self.update(|state| {
                    if state.selected_workout_id == Some(workout_id) {
                        state.fuel_events = events;
                    }
                });
                Ok(())
            })
            .await;

        if loaded {
            self.load_workouts().await;
        }
        loaded
    }

    pub async fn add_fuel_event(&self, draft: &FuelEventDraft) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let Some(workout_id) = self.selected_workout_id() else {
            return false;
        };

        let added = self
            .run_request(async {
                let _: FuelEventEnvelope = self.post(&paths::fueling(workout_id), draft).await?;
                Ok(())
            })
            .await;

        if added {
            self.load_fuel_events().await;
        }
        added
    }

    pub async fn delete_fuel_event(&self, event_id: i64) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let Some(workout_id) = self.selected_workout_id() else {
            return false;
        };

        let deleted = self
            .run_request(async {
                self.delete(&paths::fuel_event(workout_id, event_id)).await?;
                Ok(())
            })
            .await;

        if deleted {
            self.load_fuel_events().await;
        }
        deleted
    }

    /// Records what was actually consumed during the selected workout.
    pub async fn save_workout_totals(
        &self,
        carbs_g: f64,
        fluids_ml: f64,
        sodium_mg: f64,
        notes: &str,
    ) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let Some(workout_id) = self.selected_workout_id() else {
            return false;
        };

        let update = WorkoutUpdate::totals(carbs_g, fluids_ml, sodium_mg, notes);
        let saved = self
            .run_request(async {
                let _: WorkoutEnvelope = self.put(&paths::workout(workout_id), &update).await?;
                Ok(())
            })
            .await;

        if saved {
            self.load_workouts().await;
        }
        saved
    }
}
