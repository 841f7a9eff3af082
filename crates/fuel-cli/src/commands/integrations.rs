use anyhow::Result;
use fuel_protocol::{IntegrationStatus, SyncKind};
use fuel_session::SessionManager;
use serde::Serialize;

use crate::app::{finish, require_session};
use crate::output::{format_timestamp, print_json, tree_prefix};

#[derive(Serialize)]
struct ConnectOutput {
    provider: String,
    authorize_url: String,
}

#[derive(Serialize)]
struct SyncOutput {
    provider: String,
    kind: &'static str,
    synced: i64,
}

pub async fn list(manager: &SessionManager, json: bool) -> Result<()> {
    require_session(manager)?;
    let loaded = manager.load_integrations().await;
    finish(manager, loaded)?;

    let integrations = manager.snapshot().integrations;
    if json {
        return print_json(&integrations);
    }

    println!("\nProviders:\n");
    for (index, integration) in integrations.iter().enumerate() {
        println!(
            "{} {}",
            tree_prefix(index, integrations.len()),
            format_integration(integration)
        );
    }
    println!();
    Ok(())
}

/// The OAuth exchange itself happens in the browser; only the URL to open is
/// printed here.
pub async fn connect(manager: &SessionManager, provider: &str, json: bool) -> Result<()> {
    require_session(manager)?;
    let Some(authorize_url) = manager.oauth_start_url(provider).await else {
        return finish(manager, false);
    };

    if json {
        return print_json(&ConnectOutput {
            provider: provider.to_string(),
            authorize_url: authorize_url.to_string(),
        });
    }

    println!("Open this URL in your browser to connect {}:", provider);
    println!("   {}", authorize_url);
    println!("Then run `fuel integrations sync {}`.", provider);
    Ok(())
}

pub async fn sync(
    manager: &SessionManager,
    provider: &str,
    kind: SyncKind,
    json: bool,
) -> Result<()> {
    require_session(manager)?;
    let Some(synced) = manager.sync_provider(provider, kind).await else {
        return finish(manager, false);
    };

    if json {
        return print_json(&SyncOutput {
            provider: provider.to_string(),
            kind: kind.as_str(),
            synced,
        });
    }

    println!("🔄 {} {} workouts synced from {}", synced, kind.as_str(), provider);
    Ok(())
}

fn format_integration(integration: &IntegrationStatus) -> String {
    let state = if integration.connected {
        "🟢 connected"
    } else {
        "⚪ not connected"
    };
    match &integration.updated_at {
        Some(updated_at) => format!(
            "{:10} {} (updated {})",
            integration.provider,
            state,
            format_timestamp(updated_at)
        ),
        None => format!("{:10} {}", integration.provider, state),
    }
}
