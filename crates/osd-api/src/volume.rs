//! Volume intent, runtime volume records and their derived predicates.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CosType, FsType, IoProfile, VolumeState, VolumeStatus};

/// Ordered set of node ids holding copies of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaSet {
    /// Member node ids.
    pub nodes: Vec<String>,
}

/// Consistency group a volume belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group id.
    pub id: String,
}

/// Human-facing name and labels of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLocator {
    /// Display name.
    pub name: String,
    /// Labels used for lookup.
    pub volume_labels: HashMap<String, String>,
}

/// Parent reference of a clone or snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Parent volume id; empty when the volume was not derived.
    pub parent: String,
    /// Seed URI the volume was populated from.
    pub seed: String,
}

/// Declarative description of desired volume properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec {
    /// Volume is not persisted across restarts.
    pub ephemeral: bool,
    /// Size in bytes.
    pub size: u64,
    /// Filesystem to format with.
    pub format: FsType,
    /// Block size in bytes.
    pub block_size: i64,
    /// Replication level.
    pub ha_level: i64,
    /// Class of service.
    pub cos: CosType,
    /// Expected I/O pattern.
    pub io_profile: IoProfile,
    /// Inline deduplication.
    pub dedupe: bool,
    /// Snapshot interval in minutes.
    pub snapshot_interval: u32,
    /// User labels.
    pub volume_labels: HashMap<String, String>,
    /// Volume may be attached on several nodes.
    pub shared: bool,
    /// Requested placement.
    pub replica_set: Option<ReplicaSet>,
    /// Number of aggregated chunks; `AUTO_AGGREGATION` lets the driver pick.
    pub aggregation_level: u32,
    /// Encrypt at rest.
    pub encrypted: bool,
    /// Encryption passphrase.
    pub passphrase: String,
    /// Snapshot schedule expression.
    pub snapshot_schedule: String,
    /// Number of instances for scaled volumes.
    pub scale: u32,
    /// Volume survives delete requests until unstuck.
    pub sticky: bool,
    /// Consistency group.
    pub group: Option<Group>,
    /// Placement must honour the group.
    pub group_enforced: bool,
    /// Inline compression.
    pub compressed: bool,
    /// Cascaded volume.
    pub cascaded: bool,
    /// Journal volume.
    pub journal: bool,
    /// Exported over NFS.
    pub sharedv4: bool,
}

impl VolumeSpec {
    /// Deep copy. Labels, replica set nodes and group are freshly
    /// allocated, so later mutations never reach `self`.
    pub fn copy(&self) -> VolumeSpec {
        VolumeSpec {
            ephemeral: self.ephemeral,
            size: self.size,
            format: self.format,
            block_size: self.block_size,
            ha_level: self.ha_level,
            cos: self.cos,
            io_profile: self.io_profile,
            dedupe: self.dedupe,
            snapshot_interval: self.snapshot_interval,
            volume_labels: self
                .volume_labels
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            shared: self.shared,
            replica_set: self.replica_set.as_ref().map(|rs| ReplicaSet {
                nodes: rs.nodes.to_vec(),
            }),
            aggregation_level: self.aggregation_level,
            encrypted: self.encrypted,
            passphrase: self.passphrase.clone(),
            snapshot_schedule: self.snapshot_schedule.clone(),
            scale: self.scale,
            sticky: self.sticky,
            group: self.group.as_ref().map(|g| Group { id: g.id.clone() }),
            group_enforced: self.group_enforced,
            compressed: self.compressed,
            cascaded: self.cascaded,
            journal: self.journal,
            sharedv4: self.sharedv4,
        }
    }
}

/// Runtime instance of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume id.
    pub id: String,
    /// Parent reference for clones and snapshots.
    pub source: Option<Source>,
    /// Consistency group.
    pub group: Option<Group>,
    /// Volume is read-only.
    pub readonly: bool,
    /// Display name and labels.
    pub locator: Option<VolumeLocator>,
    /// Creation time.
    pub ctime: Option<DateTime<Utc>>,
    /// Desired properties.
    pub spec: Option<VolumeSpec>,
    /// Bytes used.
    pub usage: u64,
    /// Last filesystem scan.
    pub last_scan: Option<DateTime<Utc>>,
    /// Filesystem actually on the volume.
    pub format: FsType,
    /// Data-path health.
    pub status: VolumeStatus,
    /// Lifecycle state.
    pub state: VolumeState,
    /// Node the volume is attached on.
    pub attached_on: String,
    /// Device path on the attached node.
    pub device_path: String,
    /// Mount paths.
    pub attach_path: Vec<String>,
    /// Current replica placement.
    pub replica_sets: Vec<ReplicaSet>,
    /// Last error reported by the driver.
    pub error: String,
}

impl Volume {
    /// Replica sets the volume currently reports.
    pub fn replica_sets(&self) -> &[ReplicaSet] {
        &self.replica_sets
    }

    /// True if the volume runs more than one instance.
    pub fn scaled(&self) -> bool {
        self.spec.as_ref().is_some_and(|spec| spec.scale > 1)
    }

    /// True if `member_id` appears in any replica set.
    pub fn contains(&self, member_id: &str) -> bool {
        self.replica_sets()
            .iter()
            .any(|rs| rs.nodes.iter().any(|node| node == member_id))
    }

    fn has_parent(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| !source.parent.is_empty())
    }

    /// Writable volume derived from a parent.
    pub fn is_clone(&self) -> bool {
        self.has_parent() && !self.readonly
    }

    /// Read-only volume derived from a parent.
    pub fn is_snapshot(&self) -> bool {
        self.has_parent() && self.readonly
    }

    /// `"name (id)"` when a locator is present, otherwise the bare id.
    /// Meant for logs and error messages, not for lookup.
    pub fn display_id(&self) -> String {
        match &self.locator {
            Some(locator) => format!("{} ({})", locator.name, self.id),
            None => self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_source(parent: &str, readonly: bool) -> Volume {
        Volume {
            id: "v1".to_string(),
            source: Some(Source {
                parent: parent.to_string(),
                seed: String::new(),
            }),
            readonly,
            ..Default::default()
        }
    }

    #[test]
    fn test_clone_and_snapshot_classification() {
        let clone = with_source("p1", false);
        assert!(clone.is_clone());
        assert!(!clone.is_snapshot());

        let snap = with_source("p1", true);
        assert!(!snap.is_clone());
        assert!(snap.is_snapshot());
    }

    #[test]
    fn test_no_source_is_neither() {
        let vol = Volume::default();
        assert!(!vol.is_clone());
        assert!(!vol.is_snapshot());

        let ro = Volume {
            readonly: true,
            ..Default::default()
        };
        assert!(!ro.is_snapshot());
    }

    #[test]
    fn test_empty_parent_is_neither() {
        let vol = with_source("", false);
        assert!(!vol.is_clone());
        assert!(!vol.is_snapshot());
    }

    #[test]
    fn test_scaled() {
        let mut vol = Volume::default();
        assert!(!vol.scaled());
        vol.spec = Some(VolumeSpec {
            scale: 1,
            ..Default::default()
        });
        assert!(!vol.scaled());
        vol.spec = Some(VolumeSpec {
            scale: 3,
            ..Default::default()
        });
        assert!(vol.scaled());
    }

    #[test]
    fn test_contains_scans_every_replica_set() {
        let vol = Volume {
            replica_sets: vec![
                ReplicaSet {
                    nodes: vec!["n1".to_string(), "n2".to_string()],
                },
                ReplicaSet {
                    nodes: vec!["n3".to_string()],
                },
            ],
            ..Default::default()
        };
        assert!(vol.contains("n1"));
        assert!(vol.contains("n3"));
        assert!(!vol.contains("n4"));
        assert!(!Volume::default().contains("n1"));
    }

    #[test]
    fn test_display_id() {
        let mut vol = Volume {
            id: "1234".to_string(),
            ..Default::default()
        };
        assert_eq!(vol.display_id(), "1234");
        vol.locator = Some(VolumeLocator {
            name: "db-data".to_string(),
            volume_labels: HashMap::new(),
        });
        assert_eq!(vol.display_id(), "db-data (1234)");
    }

    #[test]
    fn test_spec_copy_does_not_alias_labels() {
        let mut spec = VolumeSpec::default();
        spec.volume_labels.insert("a".to_string(), "b".to_string());

        let mut spec2 = spec.copy();
        spec2.volume_labels.insert("a".to_string(), "c".to_string());

        assert_eq!(spec.volume_labels.get("a").map(String::as_str), Some("b"));
        assert_eq!(spec2.volume_labels.get("a").map(String::as_str), Some("c"));
    }

    #[test]
    fn test_spec_copy_does_not_alias_replica_nodes() {
        let spec = VolumeSpec {
            size: 1 << 30,
            ha_level: 2,
            io_profile: IoProfile::Db,
            replica_set: Some(ReplicaSet {
                nodes: vec!["n1".to_string(), "n2".to_string()],
            }),
            group: Some(Group {
                id: "g1".to_string(),
            }),
            ..Default::default()
        };

        let mut copy = spec.copy();
        assert_eq!(copy, spec);

        let original_nodes = &spec.replica_set.as_ref().unwrap().nodes;
        let copied_nodes = &copy.replica_set.as_ref().unwrap().nodes;
        assert_ne!(original_nodes.as_ptr(), copied_nodes.as_ptr());

        copy.replica_set.as_mut().unwrap().nodes[0] = "n9".to_string();
        copy.group.as_mut().unwrap().id = "g2".to_string();
        assert_eq!(spec.replica_set.as_ref().unwrap().nodes[0], "n1");
        assert_eq!(spec.group.as_ref().unwrap().id, "g1");
    }

    #[test]
    fn test_spec_copy_keeps_scalars() {
        let spec = VolumeSpec {
            ephemeral: true,
            size: 42,
            format: FsType::Xfs,
            cos: CosType::High,
            scale: 4,
            sharedv4: true,
            passphrase: "secret".to_string(),
            snapshot_schedule: "daily=12:00".to_string(),
            ..Default::default()
        };
        assert_eq!(spec.copy(), spec);
    }
}
