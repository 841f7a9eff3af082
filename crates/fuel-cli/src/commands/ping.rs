use anyhow::{bail, Result};
use fuel_session::SessionManager;
use serde::Serialize;

use crate::output::print_json;

#[derive(Serialize)]
struct PingOutput {
    reachable: bool,
    base_url: String,
    message: String,
}

pub async fn execute(manager: &SessionManager, json: bool) -> Result<()> {
    let reachable = manager.test_connection().await;
    let state = manager.snapshot();
    let message = if reachable {
        state.status_message
    } else {
        state.error_message
    };

    if json {
        print_json(&PingOutput {
            reachable,
            base_url: state.session.base_url,
            message,
        })?;
        if !reachable {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !reachable {
        bail!("{}", message);
    }
    println!("🟢 {}", message);
    Ok(())
}
