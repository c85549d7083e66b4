//! Contract strings shared with external parsers, clients and servers.
//!
//! These values are part of the wire format and must stay byte-identical.

/// Volume name.
pub const NAME: &str = "name";
/// Nodes to place the volume on.
pub const SPEC_NODES: &str = "nodes";
/// Parent volume.
pub const SPEC_PARENT: &str = "parent";
/// Ephemeral volume.
pub const SPEC_EPHEMERAL: &str = "ephemeral";
/// Shared volume.
pub const SPEC_SHARED: &str = "shared";
/// Journal volume.
pub const SPEC_JOURNAL: &str = "journal";
/// NFS-exported volume.
pub const SPEC_NFS: &str = "nfs";
/// Cascaded volume.
pub const SPEC_CASCADED: &str = "cascaded";
/// Sticky volume.
pub const SPEC_STICKY: &str = "sticky";
/// Encrypted volume.
pub const SPEC_SECURE: &str = "secure";
/// Compressed volume.
pub const SPEC_COMPRESSED: &str = "compressed";
/// Size.
pub const SPEC_SIZE: &str = "size";
/// Scale.
pub const SPEC_SCALE: &str = "scale";
/// Filesystem.
pub const SPEC_FILESYSTEM: &str = "fs";
/// Block size.
pub const SPEC_BLOCK_SIZE: &str = "block_size";
/// Replication level.
pub const SPEC_HA_LEVEL: &str = "repl";
/// IO priority.
pub const SPEC_PRIORITY: &str = "io_priority";
/// Snapshot interval.
pub const SPEC_SNAPSHOT_INTERVAL: &str = "snap_interval";
/// Snapshot schedule.
pub const SPEC_SNAPSHOT_SCHEDULE: &str = "snap_schedule";
/// Aggregation level.
pub const SPEC_AGGREGATION_LEVEL: &str = "aggregation_level";
/// Deduplication.
pub const SPEC_DEDUPE: &str = "dedupe";
/// Encryption passphrase.
pub const SPEC_PASSPHRASE: &str = "secret_key";
/// Aggregation level value that lets the driver decide.
pub const SPEC_AUTO_AGGREGATION_VALUE: &str = "auto";
/// Consistency group.
pub const SPEC_GROUP: &str = "group";
/// Enforce the consistency group.
pub const SPEC_GROUP_ENFORCE: &str = "fg";
/// Zones.
pub const SPEC_ZONES: &str = "zones";
/// Racks.
pub const SPEC_RACKS: &str = "racks";
/// Rack.
pub const SPEC_RACK: &str = "rack";
/// Regions.
pub const SPEC_REGIONS: &str = "regions";
/// Labels.
pub const SPEC_LABELS: &str = "labels";
/// Alias of `io_priority`.
pub const SPEC_PRIORITY_ALIAS: &str = "priority_io";
/// IO profile.
pub const SPEC_IO_PROFILE: &str = "io_profile";

/// Every reserved volume spec key.
pub const SPEC_KEYS: &[&str] = &[
    NAME,
    SPEC_NODES,
    SPEC_PARENT,
    SPEC_EPHEMERAL,
    SPEC_SHARED,
    SPEC_JOURNAL,
    SPEC_NFS,
    SPEC_CASCADED,
    SPEC_STICKY,
    SPEC_SECURE,
    SPEC_COMPRESSED,
    SPEC_SIZE,
    SPEC_SCALE,
    SPEC_FILESYSTEM,
    SPEC_BLOCK_SIZE,
    SPEC_HA_LEVEL,
    SPEC_PRIORITY,
    SPEC_SNAPSHOT_INTERVAL,
    SPEC_SNAPSHOT_SCHEDULE,
    SPEC_AGGREGATION_LEVEL,
    SPEC_DEDUPE,
    SPEC_PASSPHRASE,
    SPEC_GROUP,
    SPEC_GROUP_ENFORCE,
    SPEC_ZONES,
    SPEC_RACKS,
    SPEC_RACK,
    SPEC_REGIONS,
    SPEC_LABELS,
    SPEC_PRIORITY_ALIAS,
    SPEC_IO_PROFILE,
];

/// Query option keys.
pub mod opt {
    /// Look up a volume by name.
    pub const NAME: &str = "Name";
    /// Look up a volume by id.
    pub const VOLUME_ID: &str = "VolumeID";
    /// Look up a snapshot by id.
    pub const SNAP_ID: &str = "SnapID";
    /// Look up volumes by labels.
    pub const LABEL: &str = "Label";
    /// Look up volumes by config labels.
    pub const CONFIG_LABEL: &str = "ConfigLabel";
    /// Request cumulative stats.
    pub const CUMULATIVE: &str = "Cumulative";
    /// Timeout in seconds.
    pub const TIMEOUT_SEC: &str = "TimeoutSec";
    /// Quiesce id.
    pub const QUIESCE_ID: &str = "QuiesceID";
    /// Credential UUID.
    pub const CRED_UUID: &str = "CredUUID";
    /// Credential type.
    pub const CRED_TYPE: &str = "CredType";
    /// Data encryption key.
    pub const CRED_ENCR_KEY: &str = "CredEncrypt";
    /// S3 region.
    pub const CRED_REGION: &str = "CredRegion";
    /// Disable SSL.
    pub const CRED_DISABLE_SSL: &str = "CredDisableSSL";
    /// Cloud endpoint.
    pub const CRED_ENDPOINT: &str = "CredEndpoint";
    /// S3 access key.
    pub const CRED_ACCESS_KEY: &str = "CredAccessKey";
    /// S3 secret key.
    pub const CRED_SECRET_KEY: &str = "CredSecretKey";
    /// Google project id.
    pub const CRED_GOOGLE_PROJECT_ID: &str = "CredProjectID";
    /// Google JSON key.
    pub const CRED_GOOGLE_JSON_KEY: &str = "CredJsonKey";
    /// Azure account name.
    pub const CRED_AZURE_ACCOUNT_NAME: &str = "CredAccountName";
    /// Azure account key.
    pub const CRED_AZURE_ACCOUNT_KEY: &str = "CredAccountKey";
    /// Cloud backup id.
    pub const CLOUD_BACKUP_ID: &str = "CloudBackID";
    /// Source volume of a backup.
    pub const SRC_VOL_ID: &str = "SrcVolID";
    /// Desired backup/restore state.
    pub const BKUP_OP_STATE: &str = "OpState";
    /// Backup schedule UUID.
    pub const BACKUP_SCHED_UUID: &str = "BkupSchedUUID";
}

/// Volume API path.
pub const OSD_VOLUME_PATH: &str = "osd-volumes";
/// Snapshot API path.
pub const OSD_SNAPSHOT_PATH: &str = "osd-snapshot";
/// Credentials API path.
pub const OSD_CREDS_PATH: &str = "osd-creds";
/// Backup API path.
pub const OSD_BACKUP_PATH: &str = "osd-backup";
/// Timestamp layout used in API responses (`chrono` format string).
pub const TIME_LAYOUT: &str = "%b %-d %H:%M:%S UTC %Y";

/// Aggregation level that lets the driver choose.
pub const AUTO_AGGREGATION: u32 = u32::MAX;
