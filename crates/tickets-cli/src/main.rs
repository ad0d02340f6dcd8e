use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use sqlx::PgPool;
use tickets_cli::seeder::{self, SeedConfig};
use tickets_config::DatabaseConfig;
use tickets_db::{TABLES, init_db_pool, reset_tables, run_migrations};

#[derive(Parser)]
#[command(name = "tickets-cli")]
#[command(about = "Tickets CLI - Administrative tools for the Tickets API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake partners, events and customers
    Seed {
        /// Number of partners to create
        #[arg(short = 'p', long, default_value = "5")]
        partners: usize,

        /// Number of events per partner
        #[arg(short = 'e', long, default_value = "3")]
        events_per_partner: usize,

        /// Number of customers to create
        #[arg(short = 'c', long, default_value = "20")]
        customers: usize,

        /// Password shared by every seeded user
        #[arg(long, default_value = "password123")]
        password: String,
    },
    /// Truncate every table and restart id sequences
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let pool = match init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed {
            partners,
            events_per_partner,
            customers,
            password,
        } => handle_seed(&pool, partners, events_per_partner, customers, password).await,
        Commands::Reset { yes } => handle_reset(&pool, yes).await,
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    pool: &PgPool,
    partners: usize,
    events_per_partner: usize,
    customers: usize,
    password: String,
) {
    let config = SeedConfig::new(partners)
        .with_events_per_partner(events_per_partner)
        .with_customers(customers)
        .with_password(password);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_reset(pool: &PgPool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "This deletes every row in {}. Continue?",
                TABLES.join(", ")
            ))
            .default(false)
            .interact();

        match confirmed {
            Ok(true) => {}
            Ok(false) => {
                println!("Aborted.");
                return;
            }
            Err(e) => {
                eprintln!("\n❌ Failed to read confirmation: {}", e);
                std::process::exit(1);
            }
        }
    }

    match reset_tables(pool).await {
        Ok(()) => println!("✅ All tables truncated"),
        Err(e) => {
            eprintln!("\n❌ Error resetting tables: {}", e);
            std::process::exit(1);
        }
    }
}
