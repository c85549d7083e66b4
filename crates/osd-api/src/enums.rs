//! Generated enumerations shared by every OSD component.
//!
//! Values and raw names match the wire definitions; the simple-string
//! form produced by [`crate::codec::ProtoEnum::simple_string`] is what
//! APIs and CLIs exchange.

use crate::codec::{proto_enum, unprefixed_value_of};

proto_enum! {
    /// Health of a node or cluster.
    pub enum Status: "status" {
        #[default]
        None = 0 => "STATUS_NONE",
        Init = 1 => "STATUS_INIT",
        Ok = 2 => "STATUS_OK",
        Offline = 3 => "STATUS_OFFLINE",
        Error = 4 => "STATUS_ERROR",
        NotInQuorum = 5 => "STATUS_NOT_IN_QUORUM",
        Decommission = 6 => "STATUS_DECOMMISSION",
        Maintenance = 7 => "STATUS_MAINTENANCE",
        StorageDown = 8 => "STATUS_STORAGE_DOWN",
        StorageDegraded = 9 => "STATUS_STORAGE_DEGRADED",
        NeedsReboot = 10 => "STATUS_NEEDS_REBOOT",
        StorageRebalance = 11 => "STATUS_STORAGE_REBALANCE",
        StorageDriveReplace = 12 => "STATUS_STORAGE_DRIVE_REPLACE",
        Max = 13 => "STATUS_MAX",
    }
}

proto_enum! {
    /// Kind of volume driver.
    pub enum DriverType: "driver_type" {
        #[default]
        None = 0 => "DRIVER_TYPE_NONE",
        File = 1 => "DRIVER_TYPE_FILE",
        Block = 2 => "DRIVER_TYPE_BLOCK",
        Object = 3 => "DRIVER_TYPE_OBJECT",
        Clustered = 4 => "DRIVER_TYPE_CLUSTERED",
        Graph = 5 => "DRIVER_TYPE_GRAPH",
    }
}

proto_enum! {
    /// Filesystem formatted onto a volume.
    pub enum FsType: "fs_type" {
        #[default]
        None = 0 => "FS_TYPE_NONE",
        Btrfs = 1 => "FS_TYPE_BTRFS",
        Ext4 = 2 => "FS_TYPE_EXT4",
        Fuse = 3 => "FS_TYPE_FUSE",
        Nfs = 4 => "FS_TYPE_NFS",
        Vfs = 5 => "FS_TYPE_VFS",
        Xfs = 6 => "FS_TYPE_XFS",
        Zfs = 7 => "FS_TYPE_ZFS",
    }
}

proto_enum! {
    /// Change reported by a graph driver diff.
    pub enum GraphDriverChangeType: "graph_driver_change_type" {
        #[default]
        None = 0 => "GRAPH_DRIVER_CHANGE_TYPE_NONE",
        Modified = 1 => "GRAPH_DRIVER_CHANGE_TYPE_MODIFIED",
        Added = 2 => "GRAPH_DRIVER_CHANGE_TYPE_ADDED",
        Deleted = 3 => "GRAPH_DRIVER_CHANGE_TYPE_DELETED",
    }
}

proto_enum! {
    /// Urgency tier of an alert.
    pub enum SeverityType: "severity_type" {
        #[default]
        None = 0 => "SEVERITY_TYPE_NONE",
        Alarm = 1 => "SEVERITY_TYPE_ALARM",
        Warning = 2 => "SEVERITY_TYPE_WARNING",
        Notify = 3 => "SEVERITY_TYPE_NOTIFY",
    }
}

proto_enum! {
    /// Kind of cluster entity an alert concerns.
    pub enum ResourceType: "resource_type" {
        #[default]
        None = 0 => "RESOURCE_TYPE_NONE",
        Volume = 1 => "RESOURCE_TYPE_VOLUME",
        Node = 2 => "RESOURCE_TYPE_NODE",
        Cluster = 3 => "RESOURCE_TYPE_CLUSTER",
        Drive = 4 => "RESOURCE_TYPE_DRIVE",
    }
}

proto_enum! {
    /// What happened to an alert record.
    pub enum AlertActionType: "alert_action_type" {
        #[default]
        None = 0 => "ALERT_ACTION_TYPE_NONE",
        Create = 1 => "ALERT_ACTION_TYPE_CREATE",
        Delete = 2 => "ALERT_ACTION_TYPE_DELETE",
        Update = 3 => "ALERT_ACTION_TYPE_UPDATE",
    }
}

proto_enum! {
    /// Tri-state toggle used in volume set requests.
    pub enum VolumeActionParam: "volume_action_param" {
        #[default]
        None = 0 => "VOLUME_ACTION_PARAM_NONE",
        Off = 1 => "VOLUME_ACTION_PARAM_OFF",
        On = 2 => "VOLUME_ACTION_PARAM_ON",
    }
}

proto_enum! {
    /// Class of service.
    ///
    /// Raw names carry no type prefix, so parsing looks up the upper-cased
    /// input directly instead of re-prefixing it.
    pub enum CosType: "cos_type", parse_with = unprefixed_value_of {
        #[default]
        None = 0 => "NONE",
        Low = 1 => "LOW",
        Medium = 2 => "MEDIUM",
        High = 3 => "HIGH",
    }
}

proto_enum! {
    /// Expected I/O pattern, used to tune caching.
    pub enum IoProfile: "io_profile" {
        #[default]
        Sequential = 0 => "IO_PROFILE_SEQUENTIAL",
        Random = 1 => "IO_PROFILE_RANDOM",
        Db = 2 => "IO_PROFILE_DB",
        DbRemote = 3 => "IO_PROFILE_DB_REMOTE",
    }
}

proto_enum! {
    /// Lifecycle state of a volume.
    pub enum VolumeState: "volume_state" {
        #[default]
        None = 0 => "VOLUME_STATE_NONE",
        Pending = 1 => "VOLUME_STATE_PENDING",
        Available = 2 => "VOLUME_STATE_AVAILABLE",
        Attached = 3 => "VOLUME_STATE_ATTACHED",
        Detached = 4 => "VOLUME_STATE_DETACHED",
        Detatching = 5 => "VOLUME_STATE_DETATCHING",
        Error = 6 => "VOLUME_STATE_ERROR",
        Deleted = 7 => "VOLUME_STATE_DELETED",
        TryDetaching = 8 => "VOLUME_STATE_TRY_DETACHING",
        Restore = 9 => "VOLUME_STATE_RESTORE",
    }
}

proto_enum! {
    /// Data-path health of a volume.
    pub enum VolumeStatus: "volume_status" {
        #[default]
        None = 0 => "VOLUME_STATUS_NONE",
        NotPresent = 1 => "VOLUME_STATUS_NOT_PRESENT",
        Up = 2 => "VOLUME_STATUS_UP",
        Down = 3 => "VOLUME_STATUS_DOWN",
        Degraded = 4 => "VOLUME_STATUS_DEGRADED",
    }
}

proto_enum! {
    /// Physical medium backing a disk or pool.
    pub enum StorageMedium: "storage_medium" {
        #[default]
        Magnetic = 0 => "STORAGE_MEDIUM_MAGNETIC",
        Ssd = 1 => "STORAGE_MEDIUM_SSD",
        Nvme = 2 => "STORAGE_MEDIUM_NVME",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ProtoEnum;
    use crate::error::ApiError;

    fn assert_round_trip<T: ProtoEnum + PartialEq + std::fmt::Debug>() {
        for v in T::ALL {
            let s = v.simple_string();
            assert_eq!(T::simple_value_of(&s).unwrap(), *v, "round trip of {}", s);
        }
    }

    #[test]
    fn test_round_trip_every_enum() {
        assert_round_trip::<Status>();
        assert_round_trip::<DriverType>();
        assert_round_trip::<FsType>();
        assert_round_trip::<GraphDriverChangeType>();
        assert_round_trip::<SeverityType>();
        assert_round_trip::<ResourceType>();
        assert_round_trip::<AlertActionType>();
        assert_round_trip::<VolumeActionParam>();
        assert_round_trip::<CosType>();
        assert_round_trip::<IoProfile>();
        assert_round_trip::<VolumeState>();
        assert_round_trip::<VolumeStatus>();
        assert_round_trip::<StorageMedium>();
    }

    #[test]
    fn test_tables_match_variants() {
        assert_eq!(Status::NAMES.len(), Status::ALL.len());
        assert_eq!(IoProfile::NAMES.len(), IoProfile::ALL.len());
        for v in VolumeState::ALL {
            assert_eq!(VolumeState::from_value(v.value()), Some(*v));
        }
    }

    #[test]
    fn test_simple_strings() {
        assert_eq!(IoProfile::Sequential.simple_string(), "sequential");
        assert_eq!(IoProfile::DbRemote.simple_string(), "db_remote");
        assert_eq!(SeverityType::Alarm.simple_string(), "alarm");
        assert_eq!(Status::NotInQuorum.simple_string(), "not_in_quorum");
        assert_eq!(GraphDriverChangeType::Added.simple_string(), "added");
        assert_eq!(CosType::High.simple_string(), "high");
    }

    #[test]
    fn test_raw_name() {
        assert_eq!(IoProfile::Random.raw_name(), "IO_PROFILE_RANDOM");
        assert_eq!(CosType::Low.raw_name(), "LOW");
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(format!("{}", VolumeStatus::Degraded), "degraded");
        let fs: FsType = "EXT4".parse().unwrap();
        assert_eq!(fs, FsType::Ext4);
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let err = DriverType::simple_value_of("tape").unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                type_name: "DRIVER_TYPE".to_string(),
                input: "tape".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_value_has_no_variant() {
        assert_eq!(IoProfile::from_value(99), None);
        assert_eq!(SeverityType::from_value(-1), None);
    }

    // Class-of-service parsing does not re-apply the type prefix. Both
    // directions still agree for every declared value.
    #[test]
    fn test_cos_type_parses_without_prefix() {
        assert_eq!(CosType::simple_value_of("medium"), Ok(CosType::Medium));
        assert_eq!(CosType::simple_value_of("MEDIUM"), Ok(CosType::Medium));
        assert_eq!(
            CosType::simple_value_of("cos_type_medium"),
            Err(ApiError::InvalidCos {
                input: "cos_type_medium".to_string()
            })
        );
    }

    #[test]
    fn test_cos_type_error_differs_from_prefixed_enums() {
        let cos = CosType::simple_value_of("ultra").unwrap_err();
        let profile = IoProfile::simple_value_of("ultra").unwrap_err();
        assert_eq!(format!("{}", cos), "Invalid cos value: ultra");
        assert_eq!(format!("{}", profile), "no openstorage.IO_PROFILE for ultra");
    }

    #[test]
    fn test_defaults_are_zero_values() {
        assert_eq!(Status::default().value(), 0);
        assert_eq!(IoProfile::default(), IoProfile::Sequential);
        assert_eq!(CosType::default(), CosType::None);
        assert_eq!(StorageMedium::default(), StorageMedium::Magnetic);
    }

    #[test]
    fn test_serde_uses_simple_string() {
        let json = serde_json::to_string(&IoProfile::Db).unwrap();
        assert_eq!(json, "\"db\"");
        let back: SeverityType = serde_json::from_str("\"notify\"").unwrap();
        assert_eq!(back, SeverityType::Notify);
        assert!(serde_json::from_str::<SeverityType>("\"loud\"").is_err());
    }
}
