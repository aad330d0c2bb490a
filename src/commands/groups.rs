//! Group management CLI commands

use crate::commands::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::models::datafile::GroupKind;
use crate::models::group::GroupSummary;
use crate::output::truncate;
use clap::{Args, Subcommand};

/// Group management commands
#[derive(Args, Debug)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommands,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommands {
    /// Create a group
    Create(CreateArgs),
    /// Delete a group
    Delete(DeleteArgs),
    /// List groups
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the group
    #[arg(short = 'n', long)]
    pub name: String,

    /// The type of group
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: GroupKindArg,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of the group
    #[arg(short = 'n', long)]
    pub name: String,

    /// The type of group
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: GroupKindArg,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only groups of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<GroupKindArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// clap-facing mirror of `GroupKind`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GroupKindArg {
    User,
    System,
}

impl From<GroupKindArg> for GroupKind {
    fn from(arg: GroupKindArg) -> Self {
        match arg {
            GroupKindArg::User => GroupKind::User,
            GroupKindArg::System => GroupKind::System,
        }
    }
}

/// Execute group commands
pub async fn execute(args: GroupsArgs, global: &GlobalArgs) -> CliResult<()> {
    match args.command {
        GroupsCommands::Create(a) => execute_create(a, global).await,
        GroupsCommands::Delete(a) => execute_delete(a, global).await,
        GroupsCommands::List(a) => execute_list(a, global).await,
    }
}

async fn execute_create(args: CreateArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;
    let group = client.create_group(&args.name, args.kind.into()).await?;
    println!("{}", serde_json::to_string_pretty(&group)?);
    Ok(())
}

async fn execute_delete(args: DeleteArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;
    let kind: GroupKind = args.kind.into();

    let group = client
        .find_group(&args.name, kind)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("Group not found: {}", args.name)))?;

    client.delete_group(group.id, kind).await?;
    println!("Group {} deleted", args.name);
    Ok(())
}

async fn execute_list(args: ListArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;

    let mut groups = client.list_all_groups().await?;
    if let Some(kind) = args.kind {
        let kind: GroupKind = kind.into();
        groups.retain(|g| g.group_type == kind.api_type());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if groups.is_empty() {
        println!("No groups found.");
    } else {
        print_group_table(&groups);
        println!("\n{} group(s)", groups.len());
    }

    Ok(())
}

fn print_group_table(groups: &[GroupSummary]) {
    println!("{:<38} {:<25} {:<15}", "ID", "NAME", "TYPE");
    println!("{}", "-".repeat(80));

    for group in groups {
        println!(
            "{:<38} {:<25} {:<15}",
            group.id,
            truncate(&group.name, 23),
            group.group_type
        );
    }
}
