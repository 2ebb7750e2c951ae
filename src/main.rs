//! EZTravel client - command-line access to the travel-planning API
//!
//! Dispatches each subcommand to a typed endpoint client and prints the
//! result as pretty JSON, so the output can be piped into other tools.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use eztravel::api::ApiClient;
use eztravel::cli::{Cli, Command, ItinerariesCommand};
use eztravel::data::{ItineraryClient, MetaClient, NewItinerary, UserClient};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise debug mode lowers the filter so
/// request diagnostics become visible.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "eztravel=debug" } else { "eztravel=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.effective_config();
    init_tracing(config.debug);

    let client = ApiClient::new(config);

    match cli.command {
        Command::Health => {
            let health = MetaClient::new(client).health().await?;
            print_json(&health)?;
        }
        Command::Uptime => {
            let uptime = MetaClient::new(client).uptime().await?;
            print_json(&uptime)?;
        }
        Command::Version => {
            let version = MetaClient::new(client).version().await?;
            print_json(&version)?;
        }
        Command::Cache => {
            let records = MetaClient::new(client).cache_records().await?;
            print_json(&records)?;
        }
        Command::Itineraries(command) => {
            let itineraries = ItineraryClient::new(client);
            match command {
                ItinerariesCommand::List { user } => {
                    let rows = itineraries.list(user).await?;
                    print_json(&rows)?;
                }
                ItinerariesCommand::Show { id } => {
                    let row = itineraries.get(id).await?;
                    print_json(&row)?;
                }
                ItinerariesCommand::Create {
                    user,
                    title,
                    location,
                    days,
                    data,
                } => {
                    let new = NewItinerary {
                        user_id: user,
                        title,
                        location,
                        days,
                        data,
                    };
                    let receipt = itineraries.create(&new).await?;
                    print_json(&receipt)?;
                }
                ItinerariesCommand::Delete { id } => {
                    let receipt = itineraries.delete(id).await?;
                    print_json(&receipt)?;
                }
            }
        }
        Command::ResetPassword {
            email,
            current_password,
            new_password,
        } => {
            let receipt = UserClient::new(client)
                .reset_password(&email, &current_password, &new_password)
                .await?;
            print_json(&receipt)?;
        }
    }

    Ok(())
}
