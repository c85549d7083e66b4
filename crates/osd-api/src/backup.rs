//! Cloud backup and credential request/response contracts.
//!
//! These are flat value objects exchanged with the backup subsystem.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input of a credential create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredCreateRequest {
    /// Provider parameters, keyed by the `Cred*` option keys.
    pub input_params: HashMap<String, String>,
}

/// Result of a credential create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredCreateResponse {
    /// UUID of the new credential.
    pub uuid: String,
    /// Failure reason.
    pub cred_err: String,
}

/// Request a cloud backup of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRequest {
    /// Volume to back up.
    pub volume_id: String,
    /// Cloud credential to use.
    pub credential_uuid: String,
    /// Force a full backup even when an incremental one is possible.
    pub full: bool,
}

/// Restore a cloud backup into a new volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRestoreRequest {
    /// Backup to restore.
    pub cloud_backup_id: String,
    /// Optional name of the restored volume.
    pub restore_volume_name: String,
    /// Cloud credential to use.
    pub credential_uuid: String,
    /// Optional node to provision the restored volume on.
    pub node_id: String,
}

/// Outcome of a restore request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRestoreResponse {
    /// Volume being restored into.
    pub restore_volume_id: String,
    /// Failure reason.
    pub restore_err: String,
}

/// Filter for listing backups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupGenericRequest {
    /// Optional source volume.
    pub src_volume_id: String,
    /// Optional cluster.
    pub cluster_id: String,
    /// List backups of every cluster.
    pub all: bool,
    /// Cloud credential to use.
    pub credential_uuid: String,
}

/// One backup stored in the cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Source volume id.
    pub src_volume_id: String,
    /// Source volume name.
    pub src_volume_name: String,
    /// Cloud backup id.
    pub backup_id: String,
    /// Time the volume was backed up.
    pub timestamp: DateTime<Utc>,
    /// Whether the backup succeeded.
    pub status: String,
}

/// Result of listing backups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupEnumerateResponse {
    /// Backups found.
    pub backups: Vec<BackupInfo>,
    /// Failure reason.
    pub enumerate_err: String,
}

/// Filter for backup/restore status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStsRequest {
    /// Optional source volume.
    pub src_volume_id: String,
    /// Only operations active on this node.
    pub local: bool,
}

/// Progress of one backup or restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStatus {
    /// Backup or restore.
    pub op_type: String,
    /// Active, done or failed.
    pub status: String,
    /// Bytes transferred so far.
    pub bytes_done: u64,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// Completion time.
    pub completed_time: DateTime<Utc>,
    /// Backup id.
    pub backup_id: String,
    /// Node running the operation.
    pub node_id: String,
}

/// Result of a status query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStsResponse {
    /// Status keyed by volume id.
    pub statuses: HashMap<String, BackupStatus>,
    /// Failure reason.
    pub sts_err: String,
}

/// Request the contents listing of a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupCatalogueRequest {
    /// Backup id.
    pub cloud_backup_id: String,
    /// Cloud credential to use.
    pub credential_uuid: String,
}

/// Contents listing of a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupCatalogueResponse {
    /// Paths in the backup.
    pub contents: Vec<String>,
    /// Failure reason.
    pub catalogue_err: String,
}

/// Request backup history of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupHistoryRequest {
    /// Source volume.
    pub src_volume_id: String,
}

/// One completed or failed backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupHistoryItem {
    /// Source volume.
    pub src_volume_id: String,
    /// Completion or failure time.
    pub timestamp: DateTime<Utc>,
    /// Completed or failed.
    pub status: String,
}

/// Backup history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupHistoryResponse {
    /// Past operations.
    pub history_list: Vec<BackupHistoryItem>,
    /// Failure reason.
    pub history_err: String,
}

/// Pause, resume or stop a running operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStateChangeRequest {
    /// Source volume.
    pub src_volume_id: String,
    /// `pause`, `resume` or `stop`.
    pub requested_state: String,
}

/// A periodic backup schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupScheduleInfo {
    /// Source volume.
    pub src_volume_id: String,
    /// Cloud credential to use.
    pub credential_uuid: String,
    /// Backup frequency.
    pub backup_schedule: String,
    /// Backups retained in the cloud; older ones are deleted.
    pub max_backups: u32,
}

/// Delete a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSchedDeleteRequest {
    /// Schedule UUID.
    pub sched_uuid: String,
}

/// Result of creating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSchedResponse {
    /// New schedule UUID.
    pub sched_uuid: String,
    /// Failure reason.
    pub sched_create_err: String,
}

/// Every schedule, keyed by UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSchedEnumerateResponse {
    /// Schedules.
    pub backup_schedules: HashMap<String, BackupScheduleInfo>,
    /// Failure reason.
    pub sched_enumerate_err: String,
}
