mod athlete_profile;
mod connectivity;
mod planner;
mod session;

pub use athlete_profile::{AthleteProfile, ProfileFieldError};
pub use connectivity::{is_local_dev_url, Connectivity};
pub use planner::{
    IntensityMode, PlannerState, SessionType, SimulationDeltas, SportOption, UnknownOptionError,
};
pub use session::Session;
