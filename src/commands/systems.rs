//! System management CLI commands

use crate::commands::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::models::system::{SystemSummary, UpdateSystemRequest};
use crate::output::truncate;
use clap::{Args, Subcommand};

/// System management commands
#[derive(Args, Debug)]
pub struct SystemsArgs {
    #[command(subcommand)]
    pub command: SystemsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SystemsCommands {
    /// Detail view of a system, output as JSON
    Get(GetArgs),
    /// List systems
    List(ListArgs),
    /// Update attributes of a system
    Set(SetArgs),
    /// Delete a system
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// The system hostname
    #[arg(long)]
    pub hostname: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// The system hostname
    #[arg(long)]
    pub hostname: String,

    /// New display name
    #[arg(long)]
    pub display_name: Option<String>,

    /// Require multi-factor authentication
    #[arg(long)]
    pub allow_multi_factor_authentication: Option<bool>,

    /// Allow public-key authentication
    #[arg(long)]
    pub allow_public_key_authentication: Option<bool>,

    /// Allow SSH password authentication
    #[arg(long)]
    pub allow_ssh_password_authentication: Option<bool>,

    /// Allow SSH root login
    #[arg(long)]
    pub allow_ssh_root_login: Option<bool>,

    /// Replace the system's tags
    #[arg(long)]
    pub tags: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// The system hostname
    #[arg(long)]
    pub hostname: String,
}

/// Execute system commands
pub async fn execute(args: SystemsArgs, global: &GlobalArgs) -> CliResult<()> {
    match args.command {
        SystemsCommands::Get(a) => execute_get(a, global).await,
        SystemsCommands::List(a) => execute_list(a, global).await,
        SystemsCommands::Set(a) => execute_set(a, global).await,
        SystemsCommands::Delete(a) => execute_delete(a, global).await,
    }
}

async fn execute_get(args: GetArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;
    let system = client.get_system(&args.hostname).await?;
    println!("{}", serde_json::to_string_pretty(&system)?);
    Ok(())
}

async fn execute_list(args: ListArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;
    let systems = client.list_all_systems().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&systems)?);
    } else if systems.is_empty() {
        println!("No systems found.");
    } else {
        print_system_table(&systems);
        println!("\n{} system(s)", systems.len());
    }

    Ok(())
}

async fn execute_set(args: SetArgs, global: &GlobalArgs) -> CliResult<()> {
    let request = UpdateSystemRequest {
        display_name: args.display_name,
        allow_multi_factor_authentication: args.allow_multi_factor_authentication,
        allow_public_key_authentication: args.allow_public_key_authentication,
        allow_ssh_password_authentication: args.allow_ssh_password_authentication,
        allow_ssh_root_login: args.allow_ssh_root_login,
        tags: args.tags,
    };
    if request.is_empty() {
        return Err(CliError::Validation(
            "Nothing to update. Pass at least one attribute flag.".to_string(),
        ));
    }

    let client = global.client()?;
    let system = client.get_system(&args.hostname).await?;
    let updated = client.update_system(system.id, &request).await?;

    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}

async fn execute_delete(args: DeleteArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;

    let system = client.get_system(&args.hostname).await?;
    client.delete_system(system.id).await?;

    println!("Successfully deleted system {}", args.hostname);
    Ok(())
}

fn print_system_table(systems: &[SystemSummary]) {
    println!(
        "{:<38} {:<30} {:<20} {:<12}",
        "ID", "HOSTNAME", "DISPLAY NAME", "OS"
    );
    println!("{}", "-".repeat(102));

    for system in systems {
        let display = system.display_name.as_deref().unwrap_or("-");
        let os = system.os.as_deref().unwrap_or("-");

        println!(
            "{:<38} {:<30} {:<20} {:<12}",
            system.id,
            truncate(&system.hostname, 28),
            truncate(display, 18),
            os
        );
    }
}
