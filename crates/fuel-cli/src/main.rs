mod app;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{PlanArgs, SimulationArgs};
use fuel_protocol::SyncKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuel")]
#[command(about = "Fuel CLI - Plan and log endurance fueling", long_about = None)]
struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Use this backend from now on
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Log backend calls and failovers to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the backend and the signed-in account
    Status,
    /// Check that the backend answers
    Ping,
    /// Sign in with an existing account
    Login {
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account with the local profile
    Register {
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Athlete profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Food catalog
    Foods {
        #[command(subcommand)]
        action: FoodsAction,
    },
    /// Logged and planned workouts
    Workouts {
        #[command(subcommand)]
        action: WorkoutsAction,
    },
    /// Fuel events of one workout
    Fuel {
        #[command(subcommand)]
        action: FuelAction,
    },
    /// Third-party activity providers
    Integrations {
        #[command(subcommand)]
        action: IntegrationsAction,
    },
    /// Training and intake summary
    Analytics,
    /// Fueling strategies for a session
    Predict {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// What-if prediction: hotter, longer or harder
    Simulate {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        deltas: SimulationArgs,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print every profile field
    Show,
    /// Update fields, e.g. `fuel profile set body_mass_kg=68 run_ftp_w=none`.
    /// `none` resets a field to the server default.
    Set {
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },
}

#[derive(Subcommand)]
enum FoodsAction {
    /// Built-in and custom foods
    List,
    /// Add a custom food
    Add {
        name: String,
        #[arg(long, default_value = "custom")]
        category: String,
        #[arg(long, default_value = "1 serving")]
        serving: String,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        sodium: f64,
        #[arg(long, default_value_t = 0.0)]
        fluid: f64,
        #[arg(long, default_value_t = 0.0)]
        caffeine: f64,
    },
    /// Delete a custom food
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum WorkoutsAction {
    /// Most recent workouts
    List,
    /// Log a workout manually
    Create {
        sport: String,
        #[arg(long, default_value = "completed")]
        status: String,
        /// RFC 3339 start time
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        duration: Option<f64>,
        #[arg(long)]
        rpe: Option<f64>,
        #[arg(long)]
        distance: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Record what was actually consumed
    Totals {
        id: i64,
        #[arg(long)]
        carbs: f64,
        #[arg(long)]
        fluids: f64,
        #[arg(long)]
        sodium: f64,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand)]
enum FuelAction {
    /// Events ordered by minute offset
    List {
        #[arg(long)]
        workout: i64,
    },
    /// Log an intake
    Add {
        #[arg(long)]
        workout: i64,
        /// Minutes since the workout started
        #[arg(long)]
        minute: i64,
        #[arg(long)]
        food: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fluid: f64,
        #[arg(long, default_value_t = 0.0)]
        sodium: f64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an intake
    Delete {
        #[arg(long)]
        workout: i64,
        id: i64,
    },
}

#[derive(Subcommand)]
enum IntegrationsAction {
    /// Connection status per provider
    List,
    /// Print the URL that connects a provider
    Connect { provider: String },
    /// Import activities from a connected provider
    Sync {
        provider: String,
        #[arg(long, default_value = "completed")]
        kind: SyncKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "fuel=debug" } else { "fuel=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let manager = app::build_manager();
    if let Some(base_url) = cli.base_url.as_deref() {
        manager.set_base_url(base_url);
    }

    let json = cli.json;
    match cli.command {
        Commands::Status => commands::status(&manager, json).await,
        Commands::Ping => commands::ping(&manager, json).await,
        Commands::Login { email, password } => {
            commands::auth::login(&manager, &email, password).await
        }
        Commands::Register { email, password } => {
            commands::auth::register(&manager, &email, password).await
        }
        Commands::Logout => commands::auth::logout(&manager),
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&manager, json).await,
            ProfileAction::Set { assignments } => {
                commands::profile::set(&manager, &assignments).await
            }
        },
        Commands::Foods { action } => match action {
            FoodsAction::List => commands::foods::list(&manager, json).await,
            FoodsAction::Add {
                name,
                category,
                serving,
                carbs,
                sodium,
                fluid,
                caffeine,
            } => {
                let draft = fuel_protocol::FoodDraft {
                    name,
                    category,
                    serving_desc: serving,
                    carbs_g: carbs,
                    sodium_mg: sodium,
                    fluid_ml: fluid,
                    caffeine_mg: caffeine,
                };
                commands::foods::add(&manager, &draft).await
            }
            FoodsAction::Delete { id } => commands::foods::delete(&manager, id).await,
        },
        Commands::Workouts { action } => match action {
            WorkoutsAction::List => commands::workouts::list(&manager, json).await,
            WorkoutsAction::Create {
                sport,
                status,
                start,
                duration,
                rpe,
                distance,
                notes,
            } => {
                let workout = fuel_protocol::WorkoutCreate {
                    start_time: start,
                    duration_minutes: duration,
                    intensity_rpe: rpe,
                    distance_km: distance,
                    notes,
                    ..fuel_protocol::WorkoutCreate::manual(&sport, &status)
                };
                commands::workouts::create(&manager, &workout).await
            }
            WorkoutsAction::Totals {
                id,
                carbs,
                fluids,
                sodium,
                notes,
            } => commands::workouts::totals(&manager, id, carbs, fluids, sodium, &notes).await,
        },
        Commands::Fuel { action } => match action {
            FuelAction::List { workout } => commands::fuel::list(&manager, workout, json).await,
            FuelAction::Add {
                workout,
                minute,
                food,
                carbs,
                fluid,
                sodium,
                notes,
            } => {
                let draft = fuel_protocol::FuelEventDraft {
                    minute_offset: minute,
                    event_time_iso: None,
                    food_name: food,
                    carbs_g: carbs,
                    fluid_ml: fluid,
                    sodium_mg: sodium,
                    notes,
                };
                commands::fuel::add(&manager, workout, &draft, json).await
            }
            FuelAction::Delete { workout, id } => {
                commands::fuel::delete(&manager, workout, id, json).await
            }
        },
        Commands::Integrations { action } => match action {
            IntegrationsAction::List => commands::integrations::list(&manager, json).await,
            IntegrationsAction::Connect { provider } => {
                commands::integrations::connect(&manager, &provider, json).await
            }
            IntegrationsAction::Sync { provider, kind } => {
                commands::integrations::sync(&manager, &provider, kind, json).await
            }
        },
        Commands::Analytics => commands::analytics(&manager, json).await,
        Commands::Predict { plan } => commands::predict(&manager, &plan, json).await,
        Commands::Simulate { plan, deltas } => {
            commands::simulate(&manager, &plan, &deltas, json).await
        }
    }
}
