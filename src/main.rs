use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use issuedesk::commands;
use issuedesk::models::{Category, Priority};

#[derive(Parser)]
#[command(name = "issuedesk")]
#[command(about = "Create and print prioritized, categorized issues")]
#[command(version)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "ISSUEDESK_LOG_JSON")]
    log_json: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "ISSUEDESK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in sample issues
    Demo,

    /// Create an issue and print it
    Create {
        /// Issue description
        description: Option<String>,
        /// Priority
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: Priority,
        /// Category
        #[arg(short, long, value_enum, default_value = "unknown")]
        category: Category,
        /// Creation time (RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD); defaults to now
        #[arg(long)]
        created_at: Option<String>,
        /// Print the issue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a standalone issue key
    Key {
        /// Priority
        #[arg(short, long, value_enum)]
        priority: Priority,
        /// Category
        #[arg(short, long, value_enum)]
        category: Category,
        /// Year segment; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn init_tracing(verbose: bool, json: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ISSUEDESK_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json)?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Demo => commands::demo::run(),

        Commands::Create {
            description,
            priority,
            category,
            created_at,
            json,
        } => commands::create::run(
            description.as_deref(),
            priority,
            category,
            created_at.as_deref(),
            json,
        ),

        Commands::Key {
            priority,
            category,
            year,
        } => commands::key::run(priority, category, year),
    }
}
