mod analytics;
pub mod auth;
pub mod foods;
pub mod fuel;
pub mod integrations;
mod ping;
mod plan;
pub mod profile;
mod status;
pub mod workouts;

pub use analytics::execute as analytics;
pub use ping::execute as ping;
pub use plan::{predict, simulate, PlanArgs, SimulationArgs};
pub use status::execute as status;
