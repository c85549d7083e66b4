//! Alert persistence capability.
//!
//! The facade never persists anything itself. It hands every record to an
//! [`AlertStore`], which assigns identities and owns retry and timeout
//! policy. [`MemoryAlertStore`] is the in-process backend used by the CLI
//! and by tests.

use std::collections::BTreeMap;

use osd_api::{Alert, ResourceType};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{AlertError, AlertResult};

/// Alert store trait.
///
/// Implementations may block on network or disk I/O.
pub trait AlertStore: Send + Sync {
    /// Persists `alert` and writes its assigned id into `alert.id`.
    /// On failure `alert.id` is unspecified.
    fn raise(&self, alert: &mut Alert) -> AlertResult<()>;

    /// Closes the alert with the given id and resource type.
    fn clear(&self, resource: ResourceType, alert_id: i64) -> AlertResult<()>;
}

struct Inner {
    next_id: i64,
    alerts: BTreeMap<i64, Alert>,
}

/// In-memory alert store. Thread-safe via RwLock.
///
/// Ids start at 1 and increase monotonically; cleared ids are never reused.
pub struct MemoryAlertStore {
    inner: RwLock<Inner>,
}

impl MemoryAlertStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                alerts: BTreeMap::new(),
            }),
        }
    }

    /// Returns the open alert with this id and resource type.
    pub fn retrieve(&self, resource: ResourceType, alert_id: i64) -> Option<Alert> {
        let inner = self.inner.read();
        inner
            .alerts
            .get(&alert_id)
            .filter(|a| a.resource == resource)
            .cloned()
    }

    /// Returns every open alert for the resource type, ordered by id.
    pub fn enumerate(&self, resource: ResourceType) -> Vec<Alert> {
        let inner = self.inner.read();
        inner
            .alerts
            .values()
            .filter(|a| a.resource == resource)
            .cloned()
            .collect()
    }

    /// Number of open alerts.
    pub fn len(&self) -> usize {
        self.inner.read().alerts.len()
    }

    /// True if no alert is open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore for MemoryAlertStore {
    fn raise(&self, alert: &mut Alert) -> AlertResult<()> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        alert.id = id;
        inner.alerts.insert(id, alert.clone());
        debug!("Stored alert: id={}, resource={}", id, alert.resource);
        Ok(())
    }

    fn clear(&self, resource: ResourceType, alert_id: i64) -> AlertResult<()> {
        let mut inner = self.inner.write();
        let open = inner
            .alerts
            .get(&alert_id)
            .is_some_and(|a| a.resource == resource);
        if !open {
            return Err(AlertError::NotFound { resource, alert_id });
        }
        inner.alerts.remove(&alert_id);
        debug!("Cleared alert: id={}, resource={}", alert_id, resource);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osd_api::SeverityType;

    fn alert(resource: ResourceType) -> Alert {
        Alert::new(1, resource, "r1", SeverityType::Notify, "msg")
    }

    #[test]
    fn test_raise_assigns_increasing_ids() {
        let store = MemoryAlertStore::new();
        let mut a = alert(ResourceType::Node);
        let mut b = alert(ResourceType::Node);

        store.raise(&mut a).unwrap();
        store.raise(&mut b).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_retrieve_checks_resource_type() {
        let store = MemoryAlertStore::new();
        let mut a = alert(ResourceType::Volume);
        store.raise(&mut a).unwrap();

        assert_eq!(store.retrieve(ResourceType::Volume, a.id), Some(a.clone()));
        assert_eq!(store.retrieve(ResourceType::Node, a.id), None);
    }

    #[test]
    fn test_enumerate_filters_by_resource() {
        let store = MemoryAlertStore::new();
        for resource in [ResourceType::Volume, ResourceType::Node, ResourceType::Volume] {
            let mut a = alert(resource);
            store.raise(&mut a).unwrap();
        }

        let volumes = store.enumerate(ResourceType::Volume);
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[0].id, 1);
        assert_eq!(volumes[1].id, 3);
        assert!(store.enumerate(ResourceType::Drive).is_empty());
    }

    #[test]
    fn test_clear_removes_alert() {
        let store = MemoryAlertStore::new();
        let mut a = alert(ResourceType::Cluster);
        store.raise(&mut a).unwrap();

        store.clear(ResourceType::Cluster, a.id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_unknown_is_not_found() {
        let store = MemoryAlertStore::new();
        let err = store.clear(ResourceType::Node, 99).unwrap_err();
        assert_eq!(
            err,
            AlertError::NotFound {
                resource: ResourceType::Node,
                alert_id: 99
            }
        );
    }

    #[test]
    fn test_clear_wrong_resource_is_not_found() {
        let store = MemoryAlertStore::new();
        let mut a = alert(ResourceType::Volume);
        store.raise(&mut a).unwrap();

        assert!(store.clear(ResourceType::Node, a.id).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let store = MemoryAlertStore::new();
        let mut a = alert(ResourceType::Node);
        store.raise(&mut a).unwrap();
        store.clear(ResourceType::Node, a.id).unwrap();

        let mut b = alert(ResourceType::Node);
        store.raise(&mut b).unwrap();
        assert_eq!(b.id, 2);
    }
}
