//! Command-line interface parsing for the EZTravel client
//!
//! Each subcommand maps onto one API operation. Global flags override the
//! environment-derived configuration, so one shell can target several
//! deployments without re-exporting variables.

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::ApiConfig;

/// EZTravel client - inspect service health and manage travel itineraries
#[derive(Parser, Debug)]
#[command(name = "eztravel")]
#[command(about = "Client for the EZTravel travel-planning API")]
#[command(version)]
pub struct Cli {
    /// Override the API base URL (default: EZTRAVEL_BASE_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Override the API version segment (default: EZTRAVEL_API_VERSION)
    #[arg(long, value_name = "SEGMENT", global = true)]
    pub api_version: Option<String>,

    /// Bypass the response cache and log request diagnostics
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show per-component service health
    Health,
    /// Show server and model uptime
    Uptime,
    /// Show release and model version information
    Version,
    /// List server-side LLM cache records
    Cache,
    /// Manage travel itineraries
    #[command(subcommand)]
    Itineraries(ItinerariesCommand),
    /// Change the password for a user account
    ResetPassword {
        /// Account email address
        #[arg(long)]
        email: String,
        /// Current password
        #[arg(long)]
        current_password: String,
        /// New password (minimum 6 characters)
        #[arg(long)]
        new_password: String,
    },
}

/// Itinerary operations
#[derive(Subcommand, Debug)]
pub enum ItinerariesCommand {
    /// List itineraries belonging to a user
    List {
        /// User id to filter by
        #[arg(long)]
        user: i64,
    },
    /// Show a single itinerary
    Show {
        /// Itinerary id
        id: i64,
    },
    /// Create an itinerary
    Create {
        /// Owning user id
        #[arg(long)]
        user: i64,
        /// Trip title
        #[arg(long)]
        title: String,
        /// Destination
        #[arg(long)]
        location: String,
        /// Trip length in days
        #[arg(long)]
        days: i64,
        /// Itinerary content as a JSON document
        #[arg(long, value_parser = parse_json_document)]
        data: Value,
    },
    /// Delete an itinerary
    Delete {
        /// Itinerary id
        id: i64,
    },
}

impl Cli {
    /// Builds the effective configuration: environment values with CLI
    /// overrides applied on top.
    pub fn effective_config(&self) -> ApiConfig {
        let mut config = ApiConfig::from_env();
        if let Some(ref base_url) = self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(ref api_version) = self.api_version {
            config = config.with_api_version(api_version.clone());
        }
        if self.debug {
            config = config.with_debug(true);
        }
        config
    }
}

/// Parses a CLI argument as a JSON document
fn parse_json_document(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON document: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cli_parse_health_subcommand() {
        let cli = Cli::parse_from(["eztravel", "health"]);
        assert!(matches!(cli.command, Command::Health));
        assert!(cli.base_url.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parse_global_overrides() {
        let cli = Cli::parse_from([
            "eztravel",
            "--base-url",
            "http://staging:3000",
            "--api-version",
            "v2",
            "--debug",
            "uptime",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("http://staging:3000"));
        assert_eq!(cli.api_version.as_deref(), Some("v2"));
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Uptime));
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["eztravel", "version", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn test_cli_parse_itineraries_list() {
        let cli = Cli::parse_from(["eztravel", "itineraries", "list", "--user", "7"]);
        match cli.command {
            Command::Itineraries(ItinerariesCommand::List { user }) => assert_eq!(user, 7),
            other => panic!("expected itineraries list, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_itineraries_create_with_json_data() {
        let cli = Cli::parse_from([
            "eztravel",
            "itineraries",
            "create",
            "--user",
            "3",
            "--title",
            "Kyoto in autumn",
            "--location",
            "Kyoto",
            "--days",
            "5",
            "--data",
            r#"{"day1": "Fushimi Inari"}"#,
        ]);

        match cli.command {
            Command::Itineraries(ItinerariesCommand::Create {
                user,
                title,
                location,
                days,
                data,
            }) => {
                assert_eq!(user, 3);
                assert_eq!(title, "Kyoto in autumn");
                assert_eq!(location, "Kyoto");
                assert_eq!(days, 5);
                assert_eq!(data, json!({ "day1": "Fushimi Inari" }));
            }
            other => panic!("expected itineraries create, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_invalid_json_data() {
        let result = Cli::try_parse_from([
            "eztravel",
            "itineraries",
            "create",
            "--user",
            "3",
            "--title",
            "t",
            "--location",
            "l",
            "--days",
            "1",
            "--data",
            "{not json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_reset_password() {
        let cli = Cli::parse_from([
            "eztravel",
            "reset-password",
            "--email",
            "ana@example.com",
            "--current-password",
            "old-secret",
            "--new-password",
            "new-secret",
        ]);

        match cli.command {
            Command::ResetPassword {
                email,
                current_password,
                new_password,
            } => {
                assert_eq!(email, "ana@example.com");
                assert_eq!(current_password, "old-secret");
                assert_eq!(new_password, "new-secret");
            }
            other => panic!("expected reset-password, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["eztravel"]).is_err());
    }

    #[test]
    fn test_effective_config_applies_overrides() {
        let cli = Cli::parse_from([
            "eztravel",
            "--base-url",
            "http://staging:3000",
            "--debug",
            "health",
        ]);
        let config = cli.effective_config();

        assert_eq!(config.base_url, "http://staging:3000");
        assert!(config.debug);
    }

    #[test]
    fn test_parse_json_document_accepts_scalars() {
        assert_eq!(parse_json_document("42").unwrap(), json!(42));
        assert_eq!(parse_json_document("\"note\"").unwrap(), json!("note"));
    }

    #[test]
    fn test_parse_json_document_rejects_garbage() {
        assert!(parse_json_document("{day1: unquoted}").is_err());
    }
}
