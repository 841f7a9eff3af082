//! Fuel session
//!
//! Owns the signed-in session, the backend URL and every collection fetched
//! from the server. All backend calls go through one wrapper that probes the
//! backend, fails over from a dead local server to the cloud, and turns any
//! failure into a single user-facing message.

mod manager;
pub mod messages;
mod persistence;
mod state;

pub use manager::{ManagerSettings, SessionManager};
pub use persistence::SessionStorage;
pub use state::StoreState;
