use anyhow::{anyhow, Context, Result};
use fuel_core::AthleteProfile;
use fuel_session::SessionManager;

use crate::app::{finish, require_session};
use crate::output::{format_number, print_json, tree_prefix};

/// Shows the server copy when signed in, the local baseline otherwise.
pub async fn show(manager: &SessionManager, json: bool) -> Result<()> {
    if manager.is_authenticated() {
        let refreshed = manager.refresh_me().await;
        finish(manager, refreshed)?;
    }
    let profile = manager.snapshot().profile;

    if json {
        return print_json(&profile);
    }

    println!("\nAthlete profile:\n");
    let fields = profile.fields();
    for (index, (name, value)) in fields.iter().enumerate() {
        let value = value.map(format_number).unwrap_or_else(|| "-".to_string());
        println!("{} {:32} {}", tree_prefix(index, fields.len()), name, value);
    }
    println!();
    Ok(())
}

pub async fn set(manager: &SessionManager, assignments: &[String]) -> Result<()> {
    require_session(manager)?;

    let mut profile = manager.snapshot().profile;
    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        profile = profile.with_field(name, value)?;
    }

    manager.set_profile(profile);
    let saved = manager.save_profile().await;
    finish(manager, saved)?;

    println!("✅ Profile saved");
    Ok(())
}

/// `field=value`, where `none` (or an empty value) resets the field to the
/// server default.
fn parse_assignment(assignment: &str) -> Result<(&str, Option<f64>)> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow!("expected FIELD=VALUE, got '{}'", assignment))?;
    let name = name.trim();
    let raw = raw.trim();

    if !AthleteProfile::FIELD_NAMES.contains(&name) {
        return Err(anyhow!(
            "unknown profile field '{}'. Known fields: {}",
            name,
            AthleteProfile::FIELD_NAMES.join(", ")
        ));
    }
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok((name, None));
    }

    let value: f64 = raw
        .parse()
        .with_context(|| format!("invalid number for {}: '{}'", name, raw))?;
    Ok((name, Some(value)))
}
