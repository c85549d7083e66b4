//! Operator CLI for raising and clearing alerts.

use crate::config::AlertConfig;
use crate::facade::AlertFacade;
use crate::store::{AlertStore, MemoryAlertStore};
use anyhow::Result;
use clap::{Parser, Subcommand};
use osd_api::{
    AlertActionType, CosType, DriverType, FsType, GraphDriverChangeType, IoProfile, ProtoEnum,
    ResourceType, SeverityType, Status, StorageMedium, VolumeActionParam, VolumeState,
    VolumeStatus,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

/// Command line of the `osd-alert` binary.
#[derive(Parser)]
#[command(name = "osd-alert")]
#[command(about = "OSD alert CLI", long_about = None)]
pub struct Cli {
    /// Config file (.toml or .json).
    #[arg(short, long, global = true, env = "OSD_ALERT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Raise an alert and print the stored record.
    Raise {
        /// alarm, warning or notify.
        #[arg(short, long)]
        severity: SeverityType,
        /// Numeric alert type.
        #[arg(short = 't', long, default_value = "0")]
        alert_type: i64,
        /// Resource type: volume, node, cluster or drive.
        #[arg(short, long)]
        resource: ResourceType,
        /// Id of the resource the alert concerns.
        #[arg(short = 'i', long, default_value = "")]
        resource_id: String,
        /// Alert message.
        message: String,
    },
    /// Clear an alert by id.
    Clear {
        /// Resource type the alert was raised against.
        #[arg(short, long)]
        resource: ResourceType,
        /// Id returned when the alert was raised.
        #[arg(short, long)]
        alert_id: i64,
    },
    /// List the simple strings of every enum.
    Enums,
}

impl Cli {
    /// Runs the command against an in-memory store and prints JSON.
    pub fn run(self, config: &AlertConfig) -> Result<()> {
        let store: Arc<dyn AlertStore> = Arc::new(MemoryAlertStore::new());
        let facade = AlertFacade::from_config(config, store)?;
        let out = self.command.execute(&facade)?;
        println!("{}", serde_json::to_string_pretty(&out)?);
        Ok(())
    }
}

impl Command {
    /// Runs the command against `facade` and returns the JSON to print.
    pub fn execute(&self, facade: &AlertFacade) -> Result<Value> {
        match self {
            Command::Raise {
                severity,
                alert_type,
                resource,
                resource_id,
                message,
            } => {
                let alert = facade.raise(*severity, *alert_type, message, *resource, resource_id)?;
                Ok(serde_json::to_value(alert)?)
            }
            Command::Clear { resource, alert_id } => {
                facade.clear(*resource, *alert_id)?;
                Ok(json!({ "cleared": alert_id, "resource": resource }))
            }
            Command::Enums => Ok(enum_table()),
        }
    }
}

fn names<T: ProtoEnum>() -> Value {
    Value::from(T::ALL.iter().map(|v| v.simple_string()).collect::<Vec<_>>())
}

fn enum_table() -> Value {
    json!({
        "status": names::<Status>(),
        "driver_type": names::<DriverType>(),
        "fs_type": names::<FsType>(),
        "graph_driver_change_type": names::<GraphDriverChangeType>(),
        "severity_type": names::<SeverityType>(),
        "resource_type": names::<ResourceType>(),
        "alert_action_type": names::<AlertActionType>(),
        "volume_action_param": names::<VolumeActionParam>(),
        "cos_type": names::<CosType>(),
        "io_profile": names::<IoProfile>(),
        "volume_state": names::<VolumeState>(),
        "volume_status": names::<VolumeStatus>(),
        "storage_medium": names::<StorageMedium>(),
    })
}
