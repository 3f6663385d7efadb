use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use docvault_core::hash_password;
use docvault_db::{PgPool, PgUserRepository, UserRepository, init_db_pool, run_migrations};
use docvault_models::users::{NewUser, roles};

#[derive(Parser)]
#[command(name = "docvault-cli")]
#[command(about = "DocVault CLI - Administrative tools for DocVault", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account. On a fresh database this is the
    /// protected default admin (id 1).
    CreateAdmin {
        /// First name of the admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::CreateAdmin {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_admin(&pool, first_name, last_name, email, password).await,
        Commands::Migrate => {
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("✅ Migrations applied");
            Ok(())
        }
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let first_name = match first_name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("First name")
            .allow_empty(true)
            .interact_text()?,
    };

    let last_name = match last_name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Last name")
            .allow_empty(true)
            .interact_text()?,
    };

    let email: String = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let password_hash = hash_password(&password).map_err(|e| e.error)?;

    let users = PgUserRepository::new(pool.clone());
    let admin = users
        .create(NewUser {
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            email,
            password_hash,
            role_id: roles::ADMIN,
        })
        .await
        .map_err(|e| e.error.context("Error creating admin"))?;

    println!("\n✅ Admin created successfully!");
    println!("   ID: {}", admin.id);
    println!("   Email: {}", admin.email);
    if roles::is_protected_account(admin.id) {
        println!("   This is the protected default admin account.");
    }

    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
