use anyhow::Result;
use dialoguer::Password;
use fuel_session::SessionManager;

use crate::app::finish;

pub async fn login(manager: &SessionManager, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let signed_in = manager.login(email.trim(), &password).await;
    finish(manager, signed_in)?;

    print_welcome(manager);
    Ok(())
}

/// The account is created with the profile currently held locally, which is
/// the baseline unless the user edited it before signing up.
pub async fn register(
    manager: &SessionManager,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let signed_in = manager.register(email.trim(), &password).await;
    finish(manager, signed_in)?;

    print_welcome(manager);
    Ok(())
}

pub fn logout(manager: &SessionManager) -> Result<()> {
    if !manager.is_authenticated() {
        println!("⚪ Already signed out");
        return Ok(());
    }
    manager.logout();
    println!("👋 Signed out");
    Ok(())
}

fn print_welcome(manager: &SessionManager) {
    let state = manager.snapshot();
    println!("✅ Signed in as {}", state.session.user_email);
    println!(
        "   {} workouts, {} foods, {} providers",
        state.workouts.len(),
        state.foods.len(),
        state.integrations.len()
    );
    if !state.error_message.is_empty() {
        eprintln!("   Some data could not be loaded: {}", state.error_message);
    }
}
