use clap::{Parser, Subcommand};
use roster::fetch::Convention;
use roster::format_error_with_help;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Fetch and list user records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users and print them
    List {
        /// Users endpoint URL (overrides config)
        #[arg(short, long)]
        url: Option<String>,
        /// Read users from a local fixture file instead of the network
        #[arg(short, long, conflicts_with = "bundled")]
        fixture: Option<String>,
        /// Read users from the fixture bundled with roster
        #[arg(short, long)]
        bundled: bool,
        /// Calling convention used to receive the result
        #[arg(short, long, value_enum)]
        convention: Option<Convention>,
        /// Print users as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage roster configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            url,
            fixture,
            bundled,
            convention,
            json,
        } => {
            cli::list::run(cli::list::ListOptions {
                url,
                fixture,
                bundled,
                convention,
                json,
            })
            .await
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Path => cli::config::path(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
