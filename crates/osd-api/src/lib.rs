#![warn(missing_docs)]

//! OSD domain model: nodes, clusters, volumes, backups and alerts
//!
//! This crate holds the data shared by every OSD component together with
//! the pure computations layered over it: I/O metrics derived from raw
//! counters, volume classification, deep copies, and the canonical string
//! codec for generated enums.

pub mod alert;
pub mod backup;
pub mod codec;
pub mod consts;
pub mod enums;
pub mod error;
pub mod node;
pub mod stats;
pub mod value;
pub mod volume;

pub use alert::Alert;
pub use codec::{simple_string, simple_value_of, NameTable, ProtoEnum};
pub use enums::{
    AlertActionType, CosType, DriverType, FsType, GraphDriverChangeType, IoProfile,
    ResourceType, SeverityType, Status, StorageMedium, VolumeActionParam, VolumeState,
    VolumeStatus,
};
pub use error::{ApiError, ApiResult};
pub use node::{Cluster, FluentDConfig, Node, StoragePool, StorageResource, TunnelConfig};
pub use stats::{StatPoint, Stats};
pub use value::DataValue;
pub use volume::{Group, ReplicaSet, Source, Volume, VolumeLocator, VolumeSpec};
