//! User-facing texts produced by the session manager.

use fuel_core::{ApiError, TransportErrorKind};

pub const BACKEND_UNAVAILABLE: &str = "Backend is currently unavailable.";
pub const RETRY_AFTER_FAILOVER: &str = "Connected to cloud backend. Please retry.";
pub const SESSION_EXPIRED: &str = "Session expired. Please sign in again.";
pub const SWITCHED_TO_CLOUD: &str = "Switched to cloud backend.";
pub const CONNECT_FAILED: &str = "Could not connect to backend.";
pub const CONNECT_FAILED_RETRY_LATER: &str =
    "Could not connect to backend. Please try again in a moment.";

pub fn server_reachable(base_url: &str) -> String {
    format!("Server reachable at {}", base_url)
}

/// One line for any failure. 401 handling needs session state and lives in
/// the manager.
pub fn describe(error: &ApiError, base_url: &str) -> String {
    match error {
        ApiError::Transport(transport) => match transport.kind {
            TransportErrorKind::ConnectionRefused
            | TransportErrorKind::Timeout
            | TransportErrorKind::Dns => format!("Could not connect to {}.", base_url),
            TransportErrorKind::Offline => {
                format!("No internet/network route to {}.", base_url)
            }
            TransportErrorKind::ConnectionLost | TransportErrorKind::Other => {
                transport.message.clone()
            }
        },
        other => other.to_string(),
    }
}
