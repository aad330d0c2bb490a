//! User management CLI commands

use crate::commands::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserSummary};
use crate::output::truncate;
use clap::{Args, Subcommand};

/// User management commands
#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Create a new user
    Create(CreateArgs),
    /// Detail view of a user, output as JSON
    Get(GetArgs),
    /// List users
    List(ListArgs),
    /// Update attributes of an existing user
    Set(SetArgs),
    /// Delete a user
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// The user name
    #[arg(short = 'u', long)]
    pub username: String,

    /// The user's email address
    #[arg(short = 'e', long)]
    pub email: String,

    /// First name
    #[arg(short = 'f', long, default_value = "")]
    pub firstname: String,

    /// Last name
    #[arg(short = 'l', long, default_value = "")]
    pub lastname: String,

    /// Grant sudo on managed systems
    #[arg(long)]
    pub sudo: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// The user name
    #[arg(short = 'u', long)]
    pub username: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only users with this first name
    #[arg(short = 'f', long)]
    pub firstname: Option<String>,

    /// Only users with this last name
    #[arg(short = 'l', long)]
    pub lastname: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// The user name
    #[arg(short = 'u', long)]
    pub username: String,

    /// New email address
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// New first name
    #[arg(short = 'f', long)]
    pub firstname: Option<String>,

    /// New last name
    #[arg(short = 'l', long)]
    pub lastname: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// The user name
    #[arg(short = 'u', long)]
    pub username: String,
}

/// Execute user commands
pub async fn execute(args: UsersArgs, global: &GlobalArgs) -> CliResult<()> {
    match args.command {
        UsersCommands::Create(a) => execute_create(a, global).await,
        UsersCommands::Get(a) => execute_get(a, global).await,
        UsersCommands::List(a) => execute_list(a, global).await,
        UsersCommands::Set(a) => execute_set(a, global).await,
        UsersCommands::Delete(a) => execute_delete(a, global).await,
    }
}

async fn execute_create(args: CreateArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;

    let mut request =
        CreateUserRequest::new(args.username, args.email, args.firstname, args.lastname);
    request.sudo = args.sudo;

    let user = client.create_user(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!("User created: {}", user.username);
    }

    Ok(())
}

async fn execute_get(args: GetArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;
    let user = client.get_user(&args.username).await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn execute_list(args: ListArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;

    let mut users = client.list_all_users().await?;
    if let Some(ref firstname) = args.firstname {
        users.retain(|u| &u.firstname == firstname);
    }
    if let Some(ref lastname) = args.lastname {
        users.retain(|u| &u.lastname == lastname);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else if users.is_empty() {
        println!("No users found.");
    } else {
        print_user_table(&users);
        println!("\n{} user(s)", users.len());
    }

    Ok(())
}

async fn execute_set(args: SetArgs, global: &GlobalArgs) -> CliResult<()> {
    let request = UpdateUserRequest {
        email: args.email,
        firstname: args.firstname,
        lastname: args.lastname,
    };
    if request.is_empty() {
        return Err(CliError::Validation(
            "Nothing to update. Pass at least one of --email, --firstname, --lastname."
                .to_string(),
        ));
    }

    let client = global.client()?;
    let user_id = client.get_user_id(&args.username).await?;
    let user = client.update_user(user_id, &request).await?;

    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn execute_delete(args: DeleteArgs, global: &GlobalArgs) -> CliResult<()> {
    let client = global.client()?;

    let user_id = client.get_user_id(&args.username).await?;
    client.delete_user(user_id).await?;

    println!("User deleted: {}", args.username);
    Ok(())
}

fn print_user_table(users: &[UserSummary]) {
    println!(
        "{:<38} {:<20} {:<30} {:<15} {:<15}",
        "ID", "USERNAME", "EMAIL", "FIRST NAME", "LAST NAME"
    );
    println!("{}", "-".repeat(120));

    for user in users {
        println!(
            "{:<38} {:<20} {:<30} {:<15} {:<15}",
            user.id,
            truncate(&user.username, 18),
            truncate(&user.email, 28),
            truncate(&user.firstname, 13),
            truncate(&user.lastname, 13)
        );
    }
}
