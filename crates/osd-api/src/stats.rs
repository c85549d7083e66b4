//! Raw per-interval I/O counters and the metrics derived from them.
//!
//! Only counters are stored. Throughput, IOPS and latency are computed on
//! demand with truncating unsigned arithmetic and return 0 whenever the
//! divisor would be zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::DataValue;

fn to_secs(ms: u64) -> u64 {
    ms / 1000
}

/// I/O counters collected over `interval_ms`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Read operations completed.
    pub reads: u64,
    /// Milliseconds spent in reads.
    pub read_ms: u64,
    /// Bytes read.
    pub read_bytes: u64,
    /// Write operations completed.
    pub writes: u64,
    /// Milliseconds spent in writes.
    pub write_ms: u64,
    /// Bytes written.
    pub write_bytes: u64,
    /// Operations in flight at sample time.
    pub io_progress: u64,
    /// Milliseconds spent doing I/O.
    pub io_ms: u64,
    /// Bytes consumed on the backing store.
    pub bytes_used: u64,
    /// Length of the sampling interval.
    pub interval_ms: u64,
}

impl Stats {
    /// Bytes written per second of interval.
    pub fn write_throughput(&self) -> u64 {
        let secs = to_secs(self.interval_ms);
        if secs == 0 {
            return 0;
        }
        self.write_bytes / secs
    }

    /// Bytes read per second of interval.
    pub fn read_throughput(&self) -> u64 {
        let secs = to_secs(self.interval_ms);
        if secs == 0 {
            return 0;
        }
        self.read_bytes / secs
    }

    /// Average microseconds of I/O time per operation.
    pub fn latency(&self) -> u64 {
        let ops = self.writes.wrapping_add(self.reads);
        if ops == 0 {
            return 0;
        }
        self.io_ms.wrapping_mul(1000) / ops
    }

    /// Average microseconds per read.
    pub fn read_latency(&self) -> u64 {
        if self.reads == 0 {
            return 0;
        }
        self.read_ms.wrapping_mul(1000) / self.reads
    }

    /// Average microseconds per write.
    pub fn write_latency(&self) -> u64 {
        if self.writes == 0 {
            return 0;
        }
        self.write_ms.wrapping_mul(1000) / self.writes
    }

    /// Operations per second of interval.
    pub fn iops(&self) -> u64 {
        let secs = to_secs(self.interval_ms);
        if secs == 0 {
            return 0;
        }
        self.writes.wrapping_add(self.reads) / secs
    }
}

/// A single named measurement with tags and heterogeneous fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatPoint {
    /// Measurement name.
    pub name: String,
    /// Indexed tags.
    pub tags: BTreeMap<String, String>,
    /// Field values.
    pub fields: BTreeMap<String, DataValue>,
    /// Unix timestamp.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_has_no_throughput() {
        let stats = Stats {
            interval_ms: 0,
            write_bytes: 1000,
            read_bytes: 1000,
            ..Default::default()
        };
        assert_eq!(stats.write_throughput(), 0);
        assert_eq!(stats.read_throughput(), 0);
        assert_eq!(stats.iops(), 0);
    }

    #[test]
    fn test_sub_second_interval_collapses_to_zero() {
        let stats = Stats {
            interval_ms: 999,
            write_bytes: 4096,
            writes: 10,
            ..Default::default()
        };
        assert_eq!(stats.write_throughput(), 0);
        assert_eq!(stats.iops(), 0);
    }

    #[test]
    fn test_throughput_truncates() {
        let stats = Stats {
            interval_ms: 3500,
            write_bytes: 10,
            read_bytes: 7,
            ..Default::default()
        };
        assert_eq!(stats.write_throughput(), 3);
        assert_eq!(stats.read_throughput(), 2);
    }

    #[test]
    fn test_read_latency_without_reads() {
        let stats = Stats {
            reads: 0,
            read_ms: 500,
            ..Default::default()
        };
        assert_eq!(stats.read_latency(), 0);
    }

    #[test]
    fn test_write_latency() {
        let stats = Stats {
            writes: 4,
            write_ms: 8,
            ..Default::default()
        };
        assert_eq!(stats.write_latency(), 2000);
    }

    #[test]
    fn test_iops() {
        let stats = Stats {
            interval_ms: 2000,
            reads: 10,
            writes: 10,
            ..Default::default()
        };
        assert_eq!(stats.iops(), 10);
    }

    #[test]
    fn test_latency_over_all_ops() {
        let stats = Stats {
            reads: 3,
            writes: 1,
            io_ms: 10,
            ..Default::default()
        };
        assert_eq!(stats.latency(), 2500);
        assert_eq!(Stats::default().latency(), 0);
    }

    #[test]
    fn test_stat_point_fields() {
        let mut point = StatPoint {
            name: "volume_io".to_string(),
            timestamp: 1_700_000_000,
            ..Default::default()
        };
        point.tags.insert("volume".to_string(), "vol1".to_string());
        point
            .fields
            .insert("iops".to_string(), DataValue::Number(120.0));
        assert_eq!(point.fields.get("iops"), Some(&DataValue::Number(120.0)));
    }
}
