//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dataline_api::{ConnectionSchedule, SyncMode, TimeUnit};
use uuid::Uuid;

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "dataline")]
#[command(about = "Dataline configuration CLI: destinations, implementations, connections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load standard destinations and their specifications from a JSON file.
    Seed {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Standard destinations and their specifications.
    #[command(subcommand)]
    Destinations(DestinationCommands),
    /// Destination implementations (configured destinations in a workspace).
    #[command(subcommand)]
    Implementations(ImplementationCommands),
    /// Connections between source and destination implementations.
    #[command(subcommand)]
    Connections(ConnectionCommands),
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    List,
    /// Show the configuration specification of a destination.
    Specification { destination_id: Uuid },
}

#[derive(Subcommand)]
pub enum ImplementationCommands {
    Create {
        #[arg(long)]
        workspace_id: Uuid,
        #[arg(long)]
        specification_id: Uuid,
        #[arg(long)]
        name: String,
        /// Connection configuration as a JSON object.
        #[arg(long)]
        configuration: String,
    },
    Get {
        id: Uuid,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        configuration: String,
    },
    /// Tombstone the implementation and deprecate the connections writing to it.
    Delete {
        id: Uuid,
    },
    List {
        #[arg(long)]
        workspace_id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum ConnectionCommands {
    Create {
        #[arg(long)]
        source_implementation_id: Uuid,
        #[arg(long)]
        destination_implementation_id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long, value_enum, default_value_t = SyncModeArg::FullRefresh)]
        sync_mode: SyncModeArg,
        /// Run every N time units; omit for a manual connection.
        #[arg(long)]
        every: Option<u64>,
        #[arg(long, value_enum, default_value_t = TimeUnitArg::Hours)]
        time_unit: TimeUnitArg,
    },
    Get {
        id: Uuid,
    },
    List {
        #[arg(long)]
        workspace_id: Uuid,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyncModeArg {
    FullRefresh,
    Append,
}

impl From<SyncModeArg> for SyncMode {
    fn from(arg: SyncModeArg) -> Self {
        match arg {
            SyncModeArg::FullRefresh => SyncMode::FullRefresh,
            SyncModeArg::Append => SyncMode::Append,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeUnitArg {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl From<TimeUnitArg> for TimeUnit {
    fn from(arg: TimeUnitArg) -> Self {
        match arg {
            TimeUnitArg::Minutes => TimeUnit::Minutes,
            TimeUnitArg::Hours => TimeUnit::Hours,
            TimeUnitArg::Days => TimeUnit::Days,
            TimeUnitArg::Weeks => TimeUnit::Weeks,
            TimeUnitArg::Months => TimeUnit::Months,
        }
    }
}

/// Builds the schedule for `--every N --time-unit U`; `None` means manual.
pub fn schedule_from_args(every: Option<u64>, time_unit: TimeUnitArg) -> Option<ConnectionSchedule> {
    every.map(|units| ConnectionSchedule {
        units,
        time_unit: time_unit.into(),
    })
}

/// Load ServerConfig from environment.
pub fn load_config() -> Result<ServerConfig> {
    ServerConfig::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_implementation_create() {
        let workspace_id = Uuid::new_v4();
        let specification_id = Uuid::new_v4();

        let cli = Cli::try_parse_from([
            "dataline",
            "implementations",
            "create",
            "--workspace-id",
            &workspace_id.to_string(),
            "--specification-id",
            &specification_id.to_string(),
            "--name",
            "warehouse",
            "--configuration",
            r#"{"apiKey":"123-abc"}"#,
        ])
        .unwrap();

        match cli.command {
            Commands::Implementations(ImplementationCommands::Create {
                workspace_id: parsed_workspace,
                name,
                ..
            }) => {
                assert_eq!(parsed_workspace, workspace_id);
                assert_eq!(name, "warehouse");
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_rejects_malformed_uuid() {
        let result = Cli::try_parse_from(["dataline", "implementations", "get", "not-a-uuid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_from_args() {
        assert_eq!(schedule_from_args(None, TimeUnitArg::Days), None);
        assert_eq!(
            schedule_from_args(Some(6), TimeUnitArg::Hours),
            Some(ConnectionSchedule {
                units: 6,
                time_unit: TimeUnit::Hours,
            })
        );
    }
}
