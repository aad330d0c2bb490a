//! dircli - Command-line interface for the dircli directory service
//!
//! This CLI enables administrators to:
//! - Manage users, groups, and systems in the directory
//! - Reconcile the directory against a declarative data file (`sync`)

use clap::{Parser, Subcommand};

use dircli::commands::{self, GlobalArgs};
use dircli::error::CliResult;

/// dircli - directory service management
#[derive(Parser)]
#[command(name = "dircli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Command set for users
    User(commands::users::UsersArgs),

    /// Command set for groups
    Group(commands::groups::GroupsArgs),

    /// Command set for systems
    System(commands::systems::SystemsArgs),

    /// Sync the directory with a data file
    Sync(commands::sync::SyncArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::User(args) => commands::users::execute(args, &cli.global).await,
        Commands::Group(args) => commands::groups::execute(args, &cli.global).await,
        Commands::System(args) => commands::systems::execute(args, &cli.global).await,
        Commands::Sync(args) => commands::sync::execute(args, &cli.global).await,
    }
}
