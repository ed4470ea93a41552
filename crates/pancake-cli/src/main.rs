//! CLI entry point for the guarded Pancake POS wrapper.
//!
//! The `pancake` binary maps a fixed set of subcommands 1:1 onto REST
//! endpoints of the Pancake POS API. Read commands pass an optional literal
//! query string through verbatim; write commands forward a JSON body from
//! stdin unchanged and require `CONFIRM_WRITE=YES`. The raw response body
//! is written to stdout for downstream tooling (`jq` and agent callers);
//! diagnostics go to stderr.
//!
//! ```bash
//! pancake suppliers list "?page=1&page_size=50"
//! pancake suppliers purchases "?status=1"
//! echo '{"purchase":{"status":1}}' | CONFIRM_WRITE=YES pancake suppliers update-purchase <id>
//! pancake skills list
//! ```

use clap::{Parser, Subcommand};
use pancake_client::{ClientError, PosClient};
use tracing_subscriber::EnvFilter;

mod commands;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Guarded CLI wrapper for the Pancake POS REST API.
#[derive(Parser)]
#[command(
    name = "pancake",
    version,
    about = "Guarded CLI wrapper for the Pancake POS REST API",
    long_about = "A thin, stateless wrapper over the Pancake POS REST API. Each invocation \
                  performs at most one HTTP request. Mutating commands refuse to run unless \
                  CONFIRM_WRITE=YES is set."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suppliers and purchase orders.
    Suppliers {
        #[command(subcommand)]
        action: SuppliersAction,
    },

    /// Employee accounts.
    Employees {
        #[command(subcommand)]
        action: EmployeesAction,
    },

    /// Installed skill bundles.
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },
}

#[derive(Subcommand)]
enum SuppliersAction {
    /// List suppliers. QUERY is a literal query string, e.g. "?page=1&page_size=50".
    List { query: Option<String> },

    /// List purchase orders. QUERY is a literal query string, e.g. "?status=1".
    Purchases { query: Option<String> },

    /// Update a purchase order from a JSON body on stdin. Requires CONFIRM_WRITE=YES.
    UpdatePurchase { id: String },

    /// Split a purchase order from a JSON body on stdin. Requires CONFIRM_WRITE=YES.
    SplitPurchase,
}

#[derive(Subcommand)]
enum EmployeesAction {
    /// List employees. QUERY is a literal query string.
    List { query: Option<String> },

    /// Update an employee from a JSON body on stdin. Requires CONFIRM_WRITE=YES.
    Update { id: String },
}

#[derive(Subcommand)]
enum SkillsAction {
    /// List installed skills and whether their requirements are satisfied.
    List {
        /// Emit machine-readable JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print a skill's instructions.
    Show { name: String },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // A remote error still carries the response body; emit it on stdout
        // so callers can inspect the machine-readable payload, then fail.
        if let Some(ClientError::RemoteApi { body, .. }) = e.downcast_ref::<ClientError>() {
            commands::emit_body(body);
        }
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Suppliers { action } => {
            let client = PosClient::from_env()?;
            match action {
                SuppliersAction::List { query } => commands::suppliers::list(&client, query).await,
                SuppliersAction::Purchases { query } => {
                    commands::suppliers::purchases(&client, query).await
                }
                SuppliersAction::UpdatePurchase { id } => {
                    commands::suppliers::update_purchase(&client, &id).await
                }
                SuppliersAction::SplitPurchase => commands::suppliers::split_purchase(&client).await,
            }
        }
        Commands::Employees { action } => {
            let client = PosClient::from_env()?;
            match action {
                EmployeesAction::List { query } => commands::employees::list(&client, query).await,
                EmployeesAction::Update { id } => commands::employees::update(&client, &id).await,
            }
        }
        Commands::Skills { action } => match action {
            SkillsAction::List { json } => commands::skills::list(json),
            SkillsAction::Show { name } => commands::skills::show(&name),
        },
    }
}
