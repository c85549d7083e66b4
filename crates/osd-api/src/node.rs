//! Node and cluster snapshots.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CosType, Status, StorageMedium};
use crate::value::DataValue;

/// A disk visible on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageResource {
    /// Disk id.
    pub id: String,
    /// Device path.
    pub path: String,
    /// Physical medium.
    pub medium: StorageMedium,
    /// Disk is online.
    pub online: bool,
    /// Measured IOPS.
    pub iops: u64,
    /// Sequential write throughput.
    pub seq_write: f64,
    /// Sequential read throughput.
    pub seq_read: f64,
    /// Random read/write throughput.
    pub rand_rw: f64,
    /// Capacity in bytes.
    pub size: u64,
    /// Bytes used.
    pub used: u64,
    /// Rotation speed as reported by the drive.
    pub rotation_speed: String,
    /// Last health scan.
    pub last_scan: Option<DateTime<Utc>>,
    /// Disk holds metadata.
    pub metadata: bool,
}

/// A storage pool a node contributes to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePool {
    /// Pool index on the node.
    pub id: i32,
    /// Class of service.
    pub cos: CosType,
    /// Physical medium.
    pub medium: StorageMedium,
    /// RAID level.
    pub raid_level: String,
    /// Capacity in bytes.
    pub total_size: u64,
    /// Bytes used.
    pub used: u64,
    /// Pool labels.
    pub labels: HashMap<String, String>,
}

/// State of a node: resource gauges, disks, pools and addressing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node id.
    pub id: String,
    /// CPU usage percentage.
    pub cpu: f64,
    /// Total memory in bytes.
    pub mem_total: u64,
    /// Used memory in bytes.
    pub mem_used: u64,
    /// Free memory in bytes.
    pub mem_free: u64,
    /// Average load percentage.
    pub avg_load: i32,
    /// Node status.
    pub status: Status,
    /// Generation number.
    pub gen_number: u64,
    /// Disks keyed by device name.
    pub disks: HashMap<String, StorageResource>,
    /// Storage pools.
    pub pools: Vec<StoragePool>,
    /// Management IP.
    pub mgmt_ip: String,
    /// Data IP.
    pub data_ip: String,
    /// Time of this snapshot.
    pub timestamp: DateTime<Utc>,
    /// Node start time.
    pub start_time: DateTime<Utc>,
    /// Hostname.
    pub hostname: String,
    /// Free-form node metadata such as public IP, provider or city.
    pub node_data: BTreeMap<String, DataValue>,
    /// User labels.
    pub node_labels: HashMap<String, String>,
}

impl StoragePool {
    fn copy(&self) -> StoragePool {
        StoragePool {
            id: self.id,
            cos: self.cos,
            medium: self.medium,
            raid_level: self.raid_level.clone(),
            total_size: self.total_size,
            used: self.used,
            labels: self.labels.clone(),
        }
    }
}

impl Node {
    /// Deep copy. Disks, pools, metadata and labels are freshly allocated.
    pub fn copy(&self) -> Node {
        Node {
            id: self.id.clone(),
            cpu: self.cpu,
            mem_total: self.mem_total,
            mem_used: self.mem_used,
            mem_free: self.mem_free,
            avg_load: self.avg_load,
            status: self.status,
            gen_number: self.gen_number,
            disks: self
                .disks
                .iter()
                .map(|(name, disk)| (name.clone(), disk.clone()))
                .collect(),
            pools: self.pools.iter().map(StoragePool::copy).collect(),
            mgmt_ip: self.mgmt_ip.clone(),
            data_ip: self.data_ip.clone(),
            timestamp: self.timestamp,
            start_time: self.start_time,
            hostname: self.hostname.clone(),
            node_data: self
                .node_data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            node_labels: self.node_labels.clone(),
        }
    }
}

/// Deprecated fluentd endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluentDConfig {
    /// Host IP.
    pub ip: String,
    /// Host port.
    pub port: String,
}

/// Deprecated reverse proxy tunnel settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelConfig {
    /// Tunnel key.
    pub key: String,
    /// Tunnel certificate.
    pub cert: String,
    /// Tunnel endpoint.
    #[serde(rename = "tunnel_endpoint")]
    pub endpoint: String,
}

/// State of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster status.
    pub status: Status,
    /// Cluster id.
    pub id: String,
    /// Node on which this object was initialized.
    pub node_id: String,
    /// Member nodes.
    pub nodes: Vec<Node>,
    /// Logging URL.
    pub logging_url: String,
    /// Management URL.
    pub management_url: String,
    /// Deprecated fluentd host.
    pub fluentd_config: FluentDConfig,
    /// Deprecated tunnel settings.
    pub tunnel_config: TunnelConfig,
}

impl Cluster {
    /// Deep copy, copying every member node.
    pub fn copy(&self) -> Cluster {
        Cluster {
            status: self.status,
            id: self.id.clone(),
            node_id: self.node_id.clone(),
            nodes: self.nodes.iter().map(Node::copy).collect(),
            logging_url: self.logging_url.clone(),
            management_url: self.management_url.clone(),
            fluentd_config: self.fluentd_config.clone(),
            tunnel_config: self.tunnel_config.clone(),
        }
    }

    /// Member node with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
