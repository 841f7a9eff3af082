use anyhow::Result;
use fuel_session::{SessionManager, StoreState};
use serde::Serialize;

use crate::output::print_json;

#[derive(Serialize)]
struct StatusOutput {
    base_url: String,
    connectivity: &'static str,
    signed_in: bool,
    email: Option<String>,
    workouts: usize,
    foods: usize,
    connected_providers: Vec<String>,
    notice: Option<String>,
    error: Option<String>,
}

/// Probes the backend and, when signed in, refreshes the account and every
/// collection. Never fails: problems are part of the report.
pub async fn execute(manager: &SessionManager, json: bool) -> Result<()> {
    manager.bootstrap().await;
    let output = build_output(&manager.snapshot());

    if json {
        print_json(&output)?;
    } else {
        print_formatted(&output);
    }
    Ok(())
}

fn build_output(state: &StoreState) -> StatusOutput {
    let non_empty = |message: &str| (!message.is_empty()).then(|| message.to_string());

    StatusOutput {
        base_url: state.session.base_url.clone(),
        connectivity: state.session.connectivity.as_str(),
        signed_in: state.is_authenticated(),
        email: non_empty(&state.session.user_email),
        workouts: state.workouts.len(),
        foods: state.foods.len(),
        connected_providers: state
            .integrations
            .iter()
            .filter(|integration| integration.connected)
            .map(|integration| integration.provider.clone())
            .collect(),
        notice: non_empty(&state.status_message),
        error: non_empty(&state.error_message),
    }
}

fn print_formatted(output: &StatusOutput) {
    let marker = if output.connectivity == "reachable" {
        "🟢"
    } else {
        "🔴"
    };
    println!("{} Backend: {} ({})", marker, output.base_url, output.connectivity);

    match &output.email {
        Some(email) if output.signed_in => {
            println!("   Signed in as {}", email);
            println!("   Workouts: {}", output.workouts);
            println!("   Foods: {}", output.foods);
            if output.connected_providers.is_empty() {
                println!("   Providers: none connected");
            } else {
                println!("   Providers: {}", output.connected_providers.join(", "));
            }
        }
        _ => println!("⚪ Not signed in"),
    }

    if let Some(notice) = &output.notice {
        println!("   {}", notice);
    }
    if let Some(error) = &output.error {
        eprintln!("Error: {}", error);
    }
}
