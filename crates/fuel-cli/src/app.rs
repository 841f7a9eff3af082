use std::sync::Arc;

use anyhow::{bail, Result};
use fuel_adapters::{TomlKeyValueStore, UreqTransport};
use fuel_core::Config;
use fuel_session::SessionManager;
use tracing::warn;

pub fn build_manager() -> SessionManager {
    let config = Config::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load config, using defaults");
        Config::default()
    });

    SessionManager::new(
        Arc::new(UreqTransport::new()),
        Arc::new(TomlKeyValueStore::open_default()),
        &config,
    )
}

pub fn require_session(manager: &SessionManager) -> Result<()> {
    if !manager.is_authenticated() {
        bail!("Not signed in. Run `fuel login <email>` first.");
    }
    Ok(())
}

/// Turns the outcome of a manager action into the command result. A failover
/// notice is printed either way so the user knows which backend answered.
pub fn finish(manager: &SessionManager, succeeded: bool) -> Result<()> {
    let state = manager.snapshot();
    if !state.status_message.is_empty() {
        eprintln!("{}", state.status_message);
    }
    if succeeded {
        return Ok(());
    }
    if state.error_message.is_empty() {
        bail!("Request failed");
    }
    bail!("{}", state.error_message)
}
