//! Command-line argument parsing.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::ConfigError;
use crate::models::PoolField;
use crate::state::FencingPolicy;
use crate::view_state::{SortDirection, SortState, StatusFilter};

#[derive(Debug, Parser)]
#[command(name = "poolwatch", author, version, about = "Mining pool dashboard", long_about = None)]
pub struct Cli {
    /// Base URL of the mining-pool API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (0 disables)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// How superseded fetch results are handled: latest | last-resolved
    #[arg(long, global = true)]
    pub fencing: Option<FencingPolicy>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CliCommand {
    /// Fetch the pool list once and print it
    List(ListArgs),
    /// Fetch one pool and print its details
    Show(ShowArgs),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ListArgs {
    /// Only show pools with this status (all, online, degraded, offline)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Field to sort by (wire name, e.g. hashrateTHs)
    #[arg(long, default_value = "name")]
    pub sort: PoolField,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn sort_state(&self) -> SortState {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortState::new(self.sort, direction)
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ShowArgs {
    /// Pool id
    pub id: String,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let config = Config::from_env()?;
        self.apply(config)
    }

    /// Apply command-line overrides to `config`.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.trim());
        }
        if let Some(secs) = self.timeout {
            config = config.with_request_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }
        if let Some(fencing) = self.fencing {
            config = config.with_fencing(fencing);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PoolStatus;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["poolwatch"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["poolwatch", "list"]).unwrap();
        let Some(CliCommand::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.status, StatusFilter::All);
        assert_eq!(args.sort_state(), SortState::default());
        assert!(!args.json);
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from([
            "poolwatch",
            "list",
            "--status",
            "degraded",
            "--sort",
            "hashrateTHs",
            "--desc",
            "--json",
            "--api-url",
            "http://localhost:4000",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:4000"));
        let Some(CliCommand::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.status, StatusFilter::Only(PoolStatus::Degraded));
        assert_eq!(
            args.sort_state(),
            SortState::new(PoolField::HashrateThs, SortDirection::Desc)
        );
        assert!(args.json);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["poolwatch", "list", "--status", "busy"]).is_err());
        assert!(Cli::try_parse_from(["poolwatch", "list", "--sort", "color"]).is_err());
        assert!(Cli::try_parse_from(["poolwatch", "show"]).is_err());
    }

    #[test]
    fn test_show_args() {
        let cli = Cli::try_parse_from(["poolwatch", "show", "42", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(CliCommand::Show(ShowArgs {
                id: "42".to_string(),
                json: true
            }))
        );
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "poolwatch",
            "--api-url",
            "http://127.0.0.1:9/",
            "--timeout",
            "3",
            "--fencing",
            "last-resolved",
        ])
        .unwrap();
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.fencing, FencingPolicy::LastResolved);
    }

    #[test]
    fn test_bad_api_url_is_config_error() {
        let cli = Cli::try_parse_from(["poolwatch", "--api-url", "localhost"]).unwrap();
        assert!(matches!(
            cli.apply(Config::default()),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }
}
